use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::{
    reveal, GateStore, KeyedGate, Prize, RandomIndex, RngIndex, SpinController, SpinStatus,
    PRIZES,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{PrizeModal, SpinButton, Wheel};
use crate::config;
use crate::services::{local_gate, GeminiTeller, GlooClock, LocalStorage};
use crate::styles;

type Controller = SpinController<RngIndex<SmallRng>, KeyedGate<LocalStorage>>;

/// What the page needs from the controller to render.
#[derive(Debug, Clone, PartialEq)]
struct WheelView {
    status: SpinStatus,
    rotation: f64,
    has_spun_before: bool,
    prize: Option<Prize>,
    fortune: Option<String>,
}

impl WheelView {
    fn of<R: RandomIndex, G: GateStore>(controller: &SpinController<R, G>) -> Self {
        Self {
            status: controller.status(),
            rotation: controller.rotation(),
            has_spun_before: controller.has_spun_before(),
            prize: controller.selected_prize().cloned(),
            fortune: controller.fortune().map(str::to_string),
        }
    }
}

fn new_controller() -> Controller {
    let config = config::spin_config();
    let gate = local_gate(&config.gate_key);
    SpinController::new(
        PRIZES.clone(),
        config,
        RngIndex::new(SmallRng::from_entropy()),
        gate,
    )
}

#[function_component(App)]
pub fn app() -> Html {
    let controller = use_mut_ref(new_controller);
    let view = {
        let controller = controller.clone();
        use_state(move || WheelView::of(&*controller.borrow()))
    };

    let on_spin = {
        let controller = controller.clone();
        let view = view.clone();

        Callback::from(move |_: MouseEvent| {
            let plan = match controller.borrow_mut().spin() {
                Some(plan) => plan,
                None => return,
            };
            let started = WheelView::of(&*controller.borrow());
            view.set(started);

            let delay = controller.borrow().config().reveal_delay();
            let controller = controller.clone();
            let view = view.clone();

            spawn_local(async move {
                let teller = GeminiTeller::from_config();
                let outcome = reveal(&plan, &GlooClock, &teller, delay).await;

                let settled = {
                    let mut controller = controller.borrow_mut();
                    if controller.settle(outcome) {
                        log::info!("Spin settled on {}", plan.prize.label);
                    }
                    WheelView::of(&*controller)
                };
                view.set(settled);
            });
        })
    };

    let on_close = {
        let controller = controller.clone();
        let view = view.clone();

        Callback::from(move |_: MouseEvent| {
            controller.borrow_mut().close();
            let closed = WheelView::of(&*controller.borrow());
            view.set(closed);
        })
    };

    let catalog = controller.borrow().catalog().clone();

    let wrapper_state = if view.status == SpinStatus::Won {
        styles::WHEEL_WRAPPER_HIDDEN
    } else {
        styles::WHEEL_WRAPPER_SHOWN
    };

    html! {
        <div class={styles::PAGE}>
            <div class={styles::GLOW_TOP}></div>
            <div class={styles::GLOW_BOTTOM}></div>

            <header class={styles::HEADER}>
                <h1 class={styles::TITLE}>{ "GIORGIO ARMANI" }</h1>
                <div class="flex items-center gap-3">
                    <div class={styles::RULE}></div>
                    <p class={styles::SUBTITLE}>{ "CONGRATULATION" }</p>
                    <div class={styles::RULE}></div>
                </div>
            </header>

            <main class={styles::MAIN}>
                <div class={classes!(styles::WHEEL_WRAPPER, wrapper_state)}>
                    <div class="w-full h-full relative flex items-center justify-center">
                        <Wheel
                            catalog={catalog}
                            rotation={view.rotation}
                            is_spinning={view.status == SpinStatus::Spinning}
                        />
                    </div>
                </div>
            </main>

            <footer class={styles::FOOTER}>
                <SpinButton
                    status={view.status}
                    has_spun_before={view.has_spun_before}
                    onclick={on_spin}
                />
                <p class={styles::FOOTNOTE}>{ "CONGRATULATION" }</p>
            </footer>

            if view.status == SpinStatus::Won {
                if let Some(prize) = view.prize.clone() {
                    <PrizeModal prize={prize} fortune={view.fortune.clone()} on_close={on_close} />
                }
            }
        </div>
    }
}
