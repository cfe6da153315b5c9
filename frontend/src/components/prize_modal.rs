use gloo::timers::callback::Timeout;
use shared::Prize;
use yew::prelude::*;

use crate::styles;

const FADE_IN_DELAY_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct PrizeModalProps {
    pub prize: Prize,
    pub fortune: Option<String>,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(PrizeModal)]
pub fn prize_modal(props: &PrizeModalProps) -> Html {
    let is_rendered = use_state(|| false);

    {
        let is_rendered = is_rendered.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(FADE_IN_DELAY_MS, move || is_rendered.set(true));
            move || drop(timeout)
        });
    }

    let (overlay_state, card_state) = if *is_rendered {
        ("opacity-100", "scale-100 translate-y-0")
    } else {
        ("opacity-0", "scale-90 translate-y-10")
    };

    html! {
        <div class={classes!(styles::MODAL_OVERLAY, overlay_state)}>
            <div class={classes!(styles::MODAL_CARD, card_state)}>
                <div class={styles::MODAL_INNER}>
                    <span class={styles::MODAL_KICKER}>{ "Armani Reward" }</span>

                    <div class={styles::VOUCHER}>
                        <div class={styles::VOUCHER_BADGE}>{ "Congratulation" }</div>
                        <div class={styles::VOUCHER_LABEL}>{ props.prize.label.clone() }</div>
                        <span class={styles::VOUCHER_CAPTION}>{ "Voucher" }</span>
                    </div>

                    if let Some(fortune) = &props.fortune {
                        <p class={styles::FORTUNE_TEXT}>{ fortune.clone() }</p>
                    }

                    <p class={styles::INSTRUCTIONS}>
                        { "Selamat atas voucher yang berhasil Anda dapatkan. Silakan simpan bukti ini dan kirimkan kepada mentor pembimbing Anda." }
                    </p>

                    <button onclick={props.on_close.clone()} class={styles::CLOSE_BUTTON}>
                        { "Tutup" }
                    </button>
                </div>

                <p class={styles::MODAL_FOOTER}>{ "GIORGIO ARMANI MILANO" }</p>
            </div>
        </div>
    }
}
