use yew::prelude::*;

use crate::components::ring_scene::RingScene;
use crate::components::submission_panel::SubmissionPanel;
use crate::components::team::TeamSection;
use crate::forms::template::FormTemplate;

#[function_component(Landing)]
pub fn landing() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing">
            <style>
                {r#"
                .landing {
                    position: relative;
                    width: 100vw;
                    min-height: 100vh;
                    background-color: #100F1C;
                }
                .top-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 5rem;
                    background-color: rgba(16, 15, 28, 0.9);
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 2rem;
                    z-index: 99;
                    box-shadow: 0px 4px 6px rgba(0, 0, 0, 0.1);
                }
                .top-header a {
                    display: flex;
                    align-items: center;
                    text-decoration: none;
                }
                .top-header img {
                    height: 3.5rem;
                    cursor: pointer;
                }
                .landing-content {
                    position: relative;
                    width: 100%;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 2;
                    font-family: "Inter", system-ui, sans-serif;
                    color: #ffffff;
                    padding: 0 20px;
                    box-sizing: border-box;
                    text-align: center;
                }
                .landing-column {
                    display: flex;
                    flex-direction: column;
                    align-items: start;
                    gap: 1rem;
                }
                .hero-statement {
                    font-size: 1.5rem;
                    max-width: 800px;
                    margin: 15rem auto 13rem auto;
                    line-height: 1.6;
                    color: #DC66FF;
                }
                .section-title {
                    font-size: 2.5rem;
                    font-weight: bold;
                    color: #ffffff;
                    text-transform: uppercase;
                    letter-spacing: 0.1rem;
                    margin-bottom: 0.5rem;
                }
                .initiatives {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    justify-content: center;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .initiative-card {
                    background: rgba(99, 102, 241, 0.1);
                    padding: 2rem;
                    border-radius: 1rem;
                    flex: 1;
                    min-width: 300px;
                    max-width: 500px;
                    backdrop-filter: blur(10px);
                    -webkit-backdrop-filter: blur(10px);
                    border: 1px solid rgba(99, 102, 241, 0.2);
                }
                .initiative-card h2 {
                    font-size: 1.8rem;
                    margin-bottom: 1rem;
                    color: #ffffff;
                }
                .initiative-intro {
                    font-size: 1.1rem;
                    color: #a5b4fc;
                    line-height: 1.5;
                }
                .initiative-panels {
                    color: #a5b4fc;
                    margin-bottom: 1.5rem;
                }
                .site-footer {
                    position: relative;
                    bottom: 0;
                    z-index: 99;
                    width: 100%;
                    padding: 1rem 0;
                    background-color: rgba(16, 15, 28, 1);
                    color: #ffffff;
                    text-align: center;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    font-family: "Inter", system-ui, sans-serif;
                }
                .site-footer a {
                    color: #DC66FF;
                    text-decoration: none;
                    margin-left: 0.5rem;
                }
                "#}
            </style>
            <header class="top-header">
                <a href="https://doquantum.org">
                    <img src="/FullLogo_Transparent_NoBuffer.png" alt="Do Quantum Logo" />
                </a>
            </header>
            <RingScene />
            <div class="landing-content">
                <div class="landing-column">
                    <p class="hero-statement">
                        {"A UMD researcher-run non-profit bridging the gap between quantum computing theory and practice. \
                          We empower students to become quantum researchers and help companies \
                          harness the power of quantum computing."}
                    </p>
                    <h1 class="section-title">{"Our Spring 2024 Initiatives"}</h1>
                    <div class="initiatives">
                        <div class="initiative-card">
                            <h2>{"Research Platform"}</h2>
                            <p class="initiative-intro">{"Our platform will serve:"}</p>
                            <div class="initiative-panels">
                                <SubmissionPanel
                                    title="UMD Students"
                                    action_label="Join Waitlist"
                                    form={FormTemplate::simple()}
                                >
                                    <p>{"Start with just Python knowledge. We'll help you build expertise in Quantum ML, NLP, and cryptography through interactive games, do research, get an advisor, and publish your work."}</p>
                                </SubmissionPanel>
                                <SubmissionPanel
                                    title="UMD Professors"
                                    action_label="Apply to Advise"
                                    form={FormTemplate::simple()}
                                >
                                    <p>{"Share your expertise as a research advisor and publish faster. Choose your projects, set your availability, and guide the next generation of quantum researchers for as little as 1hr/week."}</p>
                                </SubmissionPanel>
                            </div>
                        </div>
                        <div class="initiative-card">
                            <h2>{"One Corporate Project"}</h2>
                            <p class="initiative-intro">{"We plan to serve:"}</p>
                            <div class="initiative-panels">
                                <SubmissionPanel
                                    title="UMD Students"
                                    action_label="Join Waitlist"
                                    form={FormTemplate::simple()}
                                >
                                    <p>{"Collaborate on a cutting-edge quantum computing project, guided by an experienced team lead, alongside fellow students and company advisors."}</p>
                                </SubmissionPanel>
                                <SubmissionPanel
                                    title="Corporations"
                                    action_label="Contact Us"
                                    form={FormTemplate::contact()}
                                >
                                    <p>{"Work with an experienced team lead and dedicated student team on a quantum computing project. Only one company will be selected."}</p>
                                </SubmissionPanel>
                            </div>
                        </div>
                    </div>
                    <TeamSection />
                </div>
            </div>
            <footer class="site-footer">
                <p>
                    {"Call or Text us:"}
                    <a href="tel:+19083071999">{"+1 (908) 307-1999"}</a>
                </p>
                <p>
                    {"Email us:"}
                    <a href="mailto:doquantumresearch@gmail.com">{"doquantumresearch@gmail.com"}</a>
                </p>
            </footer>
        </div>
    }
}
