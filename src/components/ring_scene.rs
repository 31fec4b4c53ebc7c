use web_sys::Element;
use yew::prelude::*;

use crate::scene::controller::SceneController;

/// Full-bleed container that hosts the spinning ring decoration.
#[function_component(RingScene)]
pub fn ring_scene() -> Html {
    let mount_ref = use_node_ref();

    {
        let mount_ref = mount_ref.clone();
        use_effect_with_deps(
            move |_| {
                let controller = mount_ref.cast::<Element>().and_then(|container| {
                    match SceneController::mount(&container) {
                        Ok(controller) => Some(controller),
                        Err(e) => {
                            log::error!("Ring scene unavailable: {}", e);
                            None
                        }
                    }
                });
                move || drop(controller)
            },
            (),
        );
    }

    html! {
        <div ref={mount_ref} class="ring-scene">
            <style>
                {r#"
                .ring-scene {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    z-index: 1;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    pointer-events: none;
                }
                "#}
            </style>
        </div>
    }
}
