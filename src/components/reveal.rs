use log::warn;
use yew::prelude::*;

use crate::config;
use crate::observer;

#[derive(Clone, Copy, PartialEq)]
pub enum RevealKind {
    /// Fade in while rising slightly.
    FadeUp,
    /// Plain fade in.
    Fade,
}

impl RevealKind {
    fn class(self) -> &'static str {
        match self {
            RevealKind::FadeUp => "reveal-up",
            RevealKind::Fade => "reveal-fade",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(RevealKind::FadeUp)]
    pub kind: RevealKind,
    /// Transition delay, for staggering sibling reveals.
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
}

/// Wrapper that plays its enter transition once, the first time it scrolls
/// into view. The `.reveal-*` styles live in the page-level style block.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let visible = visible.clone();
        let threshold = props.threshold;
        use_effect_with_deps(
            move |_| {
                let mut handle = None;
                if let Some(element) = node_ref.cast::<web_sys::Element>() {
                    let on_visible = {
                        let visible = visible.clone();
                        Callback::from(move |_| visible.set(true))
                    };
                    match observer::observe_once(&element, threshold, on_visible) {
                        Ok(h) => handle = Some(h),
                        Err(err) => {
                            // No observer: show the content statically.
                            warn!("intersection observer unavailable: {:?}", err);
                            visible.set(true);
                        }
                    }
                } else {
                    visible.set(true);
                }
                move || drop(handle)
            },
            (),
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node_ref}
            class={classes!(
                "reveal",
                props.kind.class(),
                visible.then(|| "is-visible"),
                props.class.clone(),
            )}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
