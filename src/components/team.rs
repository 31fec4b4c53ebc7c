use yew::prelude::*;

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
    pub bio: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Evren Yücekuş~Kissane",
        role: "Founder & CEO",
        photo: "/evren-pic.png",
        bio: "Evren has conducted and presented his own quantum NLP research, has 3+ years of experience developing software with ML and NLP, and has 2+ years of experience in R&D.",
    },
    TeamMember {
        name: "Diego Lopez",
        role: "Backend Developer",
        photo: "/diego-pic.png",
        bio: "Diego has leveraged his knowledge in data science and machine learning to develop a wide range of applications and web projects, from small-scale to complex systems, for the past 3+ years.",
    },
];

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    html! {
        <>
            <style>
                {r#"
                .team-grid {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    margin: 0 auto;
                    gap: 2rem;
                    padding: 2rem;
                    background-color: #100F1C;
                }
                .team-card {
                    max-width: 300px;
                    text-align: center;
                    background-color: rgba(99, 102, 241, 0.1);
                    border-radius: 1rem;
                    padding: 1.5rem;
                    border: 1px solid rgba(99, 102, 241, 0.2);
                    color: #ffffff;
                }
                .team-card img {
                    width: 200px;
                    height: 200px;
                    border-radius: 50%;
                    margin-bottom: 1rem;
                    border: 3px solid #DC66FF;
                }
                .team-card h3 {
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }
                .team-role {
                    font-size: 1rem;
                    color: #a5b4fc;
                    margin-bottom: 1rem;
                }
                .team-bio {
                    font-size: 0.9rem;
                    line-height: 1.6;
                }
                "#}
            </style>
            <h1 class="section-title">{"Meet Our Team"}</h1>
            <div class="team-grid">
                { for TEAM.iter().enumerate().map(|(i, member)| html! {
                    <div class="team-card" key={member.name}>
                        <img src={member.photo} alt={format!("Team Member {}", i + 1)} />
                        <h3>{ member.name }</h3>
                        <p class="team-role">{ member.role }</p>
                        <p class="team-bio">{ member.bio }</p>
                    </div>
                }) }
            </div>
        </>
    }
}
