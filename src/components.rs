//! Pure Yew view components for the Temporizer UI.
//!
//! Components only render props and forward events as callbacks; all state
//! lives in the countdown reducer owned by the root component.

use temporizer::config::LOGO_SRC;
use temporizer::display::{ControlState, DigitPair};
use temporizer::edit::{Cell, TimePart};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Edit callback; returns whether the edit was accepted.
pub type OnCellEdit = Callback<(TimePart, Cell, String), bool>;

/// A single editable digit cell.
#[derive(Properties, PartialEq)]
pub struct DigitCellProps {
    pub part: TimePart,
    pub cell: Cell,
    pub value: String,
    pub readonly: bool,
    pub on_edit: OnCellEdit,
}

#[function_component(DigitCell)]
pub fn digit_cell(props: &DigitCellProps) -> Html {
    let oninput = {
        let part = props.part;
        let cell = props.cell;
        let accepted = props.value.clone();
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if !on_edit.emit((part, cell, input.value())) {
                // No re-render follows a rejected edit, so undo it in the DOM.
                input.set_value(&accepted);
            }
        })
    };

    let position = match props.cell {
        Cell::Left => "dezena",
        Cell::Right => "unidade",
    };

    html! {
        <input
            type="text"
            inputmode="numeric"
            maxlength="1"
            class={classes!("digit-cell", (!props.readonly).then_some("editing"))}
            aria-label={format!("{} das {}", position, props.part.label())}
            value={props.value.clone()}
            readonly={props.readonly}
            {oninput}
        />
    }
}

/// The two cells of one time part.
#[derive(Properties, PartialEq)]
pub struct DigitPairProps {
    pub part: TimePart,
    pub pair: DigitPair,
    pub readonly: bool,
    pub on_edit: OnCellEdit,
}

#[function_component(DigitPairInput)]
pub fn digit_pair_input(props: &DigitPairProps) -> Html {
    html! {
        <div class="digit-pair">
            <DigitCell
                part={props.part}
                cell={Cell::Left}
                value={props.pair.left.clone()}
                readonly={props.readonly}
                on_edit={props.on_edit.clone()}
            />
            <DigitCell
                part={props.part}
                cell={Cell::Right}
                value={props.pair.right.clone()}
                readonly={props.readonly}
                on_edit={props.on_edit.clone()}
            />
        </div>
    }
}

/// Bare seconds count shown during the last ten seconds.
#[derive(Properties, PartialEq)]
pub struct LastSecondsProps {
    pub seconds: u32,
    pub word: &'static str,
    pub visible: bool,
}

#[function_component(LastSeconds)]
pub fn last_seconds(props: &LastSecondsProps) -> Html {
    html! {
        <div class={classes!("last-seconds", (!props.visible).then_some("hidden"))}
             aria-live="polite">
            <span class="last-seconds-count">{ props.seconds }</span>
            <span class="last-seconds-word">{ props.word }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    pub visible: bool,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <img src={LOGO_SRC}
             alt="Logo Temporizer"
             class={classes!("logo", (!props.visible).then_some("hidden"))} />
    }
}

/// Round icon button with a screen-reader label.
#[derive(Properties, PartialEq)]
pub struct IconButtonProps {
    pub label: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(IconButton)]
pub fn icon_button(props: &IconButtonProps) -> Html {
    html! {
        <button type="button"
                class={classes!("icon-button", props.class.clone())}
                title={props.title}
                disabled={props.disabled}
                onclick={props.onclick.clone()}>
            <span class="icon" aria-hidden="true">{ props.icon }</span>
            <span class="sr-only">{ props.label }</span>
        </button>
    }
}

/// Edit toggle, reset, pause and start.
#[derive(Properties, PartialEq)]
pub struct ControlBarProps {
    pub controls: ControlState,
    pub finished: bool,
    pub on_toggle_edit: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
    pub on_pause: Callback<MouseEvent>,
    pub on_start: Callback<MouseEvent>,
}

#[function_component(ControlBar)]
pub fn control_bar(props: &ControlBarProps) -> Html {
    let c = props.controls;
    html! {
        <div class={classes!("controls", (!c.show_control_row).then_some("hidden"))}>
            if c.show_run_buttons {
                <IconButton label="Edit"
                            title="clique para editar o contador"
                            icon="✎"
                            onclick={props.on_toggle_edit.clone()} />
            }
            <IconButton label="Reset"
                        title="clique para resetar o contador"
                        icon="↻"
                        class={classes!(props.finished.then_some("inverted"))}
                        onclick={props.on_reset.clone()} />
            if c.show_run_buttons {
                <IconButton label="Pause"
                            title="clique para pausar o contador"
                            icon="■"
                            class={classes!("pause")}
                            disabled={c.pause_disabled}
                            onclick={props.on_pause.clone()} />
                <IconButton label="Start"
                            title="clique para iniciar o contador"
                            icon="▶"
                            class={classes!("start")}
                            disabled={c.start_disabled}
                            onclick={props.on_start.clone()} />
            }
        </div>
    }
}

/// Confirm button shown while editing.
#[derive(Properties, PartialEq)]
pub struct EditBarProps {
    pub visible: bool,
    pub on_confirm: Callback<MouseEvent>,
}

#[function_component(EditBar)]
pub fn edit_bar(props: &EditBarProps) -> Html {
    html! {
        <div class={classes!("edit-controls", (!props.visible).then_some("hidden"))}>
            <IconButton label="Confirm edition"
                        title="clique para concluir a edição do contador"
                        icon="✓"
                        class={classes!("start")}
                        onclick={props.on_confirm.clone()} />
        </div>
    }
}
