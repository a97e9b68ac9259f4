use gloo_timers::callback::Timeout;
use temporizer::config::TICK_MS;
use yew::prelude::*;

/// Schedule one tick `TICK_MS` after every change of `remaining` while
/// `active`.
///
/// The pending `Timeout` is owned by the effect: dropping it clears the
/// browser timer, which happens whenever `active` or `remaining` change and
/// when the component unmounts. A stale tick can therefore never fire after a
/// pause or reset.
#[hook]
pub fn use_ticker(active: bool, remaining: u32, on_tick: Callback<()>) {
    use_effect_with((active, remaining), move |&(active, _)| {
        let pending = active.then(|| Timeout::new(TICK_MS, move || on_tick.emit(())));
        move || drop(pending)
    });
}

/// Mirror `title` into `document.title`.
#[hook]
pub fn use_page_title(title: String) {
    use_effect_with(title, |title| {
        gloo_utils::document().set_title(title);
        || ()
    });
}
