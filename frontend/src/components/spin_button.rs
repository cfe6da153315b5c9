use shared::SpinStatus;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub status: SpinStatus,
    pub has_spun_before: bool,
    pub onclick: Callback<MouseEvent>,
}

pub fn button_label(status: SpinStatus, has_spun_before: bool) -> &'static str {
    if status == SpinStatus::Spinning {
        "PROCESSO..."
    } else if has_spun_before {
        "-"
    } else {
        "MULAI PUTAR"
    }
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let is_disabled = props.status == SpinStatus::Spinning || props.has_spun_before;
    let state_class = if is_disabled {
        styles::SPIN_BUTTON_DISABLED
    } else {
        styles::SPIN_BUTTON_ACTIVE
    };

    html! {
        <div class="relative w-full max-w-[240px] group">
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class={classes!(styles::SPIN_BUTTON, state_class)}
            >
                <span class="relative z-10">{ button_label(props.status, props.has_spun_before) }</span>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_label() {
        assert_eq!(button_label(SpinStatus::Idle, false), "MULAI PUTAR");
        assert_eq!(button_label(SpinStatus::Spinning, false), "PROCESSO...");
        assert_eq!(button_label(SpinStatus::Idle, true), "-");
        assert_eq!(button_label(SpinStatus::Won, true), "-");
    }
}
