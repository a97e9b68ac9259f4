//! Main module for the Temporizer application using Yew.
//! Wires the countdown reducer, the ticker and the view components.

use std::rc::Rc;
use temporizer::config::WARNING_SOUND_SRC;
use temporizer::cue::AudioCue;
use temporizer::display::{seconds_word, DisplayMode};
use temporizer::edit::{Cell, TimePart};
use temporizer::store::TimerAction;
use temporizer::Countdown;
use yew::prelude::*;

mod components;
mod hooks;

use components::{ControlBar, DigitPairInput, EditBar, LastSeconds, Logo, OnCellEdit};
use hooks::{use_page_title, use_ticker};

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Callback that dispatches a fixed action on click.
fn on_click(
    dispatcher: &UseReducerDispatcher<Countdown>,
    action: TimerAction,
) -> Callback<MouseEvent> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |_| dispatcher.dispatch(action.clone()))
}

// ──────────────────────────────────────────────────────────────────────────────

/// The countdown widget: owns the timer state and renders itself.
#[function_component(TimerWidget)]
fn timer_widget() -> Html {
    let timer = use_reducer(|| Countdown::new(Rc::new(AudioCue::new(WARNING_SOUND_SRC))));
    let dispatcher = timer.dispatcher();
    let face = timer.face();

    {
        let dispatcher = dispatcher.clone();
        use_ticker(
            timer.is_running(),
            timer.remaining(),
            Callback::from(move |_| dispatcher.dispatch(TimerAction::Tick)),
        );
    }
    use_page_title(face.title.clone());

    // Checked against the rendered state so the cell can revert a rejected edit.
    let on_edit: OnCellEdit = {
        let timer = timer.clone();
        Callback::from(move |(part, cell, text): (TimePart, Cell, String)| {
            match timer.check_cell(part, cell, &text) {
                Ok(_) => {
                    timer.dispatch(TimerAction::EditCell { part, cell, text });
                    true
                }
                Err(err) => {
                    log::debug!("Rejected {:?} edit: {}", part, err);
                    false
                }
            }
        })
    };

    let finished = face.mode == DisplayMode::Finished;
    let last_seconds = face.mode == DisplayMode::LastSeconds;
    let controls = face.controls;

    html! {
        <main class={classes!("timer", finished.then_some("finished"))}>
            <div class="timer-body">
                if !finished {
                    <Logo visible={controls.show_logo} />
                }

                <div class="clock">
                    if finished {
                        <div class="finished-zero"><span>{ "0" }</span></div>
                    } else {
                        <div class={classes!("digits", last_seconds.then_some("hidden"))}>
                            { for TimePart::ALL.iter().enumerate().map(|(idx, &part)| html! {
                                <>
                                    if idx > 0 {
                                        <span class="separator">{ ":" }</span>
                                    }
                                    <DigitPairInput
                                        {part}
                                        pair={face.pair(part).clone()}
                                        readonly={controls.cells_readonly}
                                        on_edit={on_edit.clone()}
                                    />
                                </>
                            }) }
                        </div>
                        <LastSeconds
                            seconds={face.last_seconds}
                            word={seconds_word(face.last_seconds)}
                            visible={last_seconds}
                        />
                    }
                </div>

                <ControlBar
                    {controls}
                    {finished}
                    on_toggle_edit={on_click(&dispatcher, TimerAction::ToggleEdit)}
                    on_reset={on_click(&dispatcher, TimerAction::Reset)}
                    on_pause={on_click(&dispatcher, TimerAction::Pause)}
                    on_start={on_click(&dispatcher, TimerAction::Start)}
                />
                <EditBar
                    visible={controls.show_confirm_edit}
                    on_confirm={on_click(&dispatcher, TimerAction::ConfirmEdit)}
                />
            </div>
        </main>
    }
}

/// Entry point: installs the panic hook and renders the widget.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    log::info!("Starting Temporizer");
    yew::Renderer::<TimerWidget>::new().render();
}
