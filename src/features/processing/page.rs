//! Processing Page
//!
//! Slot processor, simulator init and the bid form. Inputs are
//! gpui-component text inputs whose edits are mirrored into
//! [`ProcessingState`] on every change.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, FontWeight, IntoElement, ParentElement,
    Render, SharedString, Styled, Subscription, Window,
};
use gpui_component::input::{Input, InputEvent, InputState};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::components::primitives::form_field::FormField;
use crate::components::primitives::radio_group::RadioGroup;
use crate::domain::situation::Situation;
use crate::features::cells;
use crate::features::processing::controller::ProcessingController;
use crate::i18n::{t, Locale};
use crate::state::processing_state::{FieldError, PendingAction};
use crate::theme::colors::DashColors;

/// Inline text for a field error
fn error_text(error: Option<FieldError>, locale: Locale) -> Option<SharedString> {
    error.map(|error| match error {
        FieldError::NotAfterHead { head } => {
            format!("{} {head}", t(locale, error.message_key())).into()
        }
        _ => t(locale, error.message_key()),
    })
}

fn card(title: SharedString) -> gpui::Div {
    div()
        .w_full()
        .bg(DashColors::content_bg())
        .border_1()
        .border_color(DashColors::border())
        .rounded_md()
        .p_4()
        .flex()
        .flex_col()
        .gap_3()
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::MEDIUM)
                .child(title),
        )
}

pub struct ProcessingPage {
    entities: AppEntities,
    controller: ProcessingController,
    slot_input: Entity<InputState>,
    shard_input: Entity<InputState>,
    bid_slot_input: Entity<InputState>,
    fee_input: Entity<InputState>,
    file_input: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl ProcessingPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let controller = ProcessingController::new(entities.clone());
        let locale = entities.i18n.read(cx).locale;

        let mut input = |key: &str, cx: &mut Context<Self>| {
            let placeholder = t(locale, key);
            cx.new(|cx| InputState::new(window, cx).placeholder(placeholder))
        };
        let slot_input = input("processing.slot_placeholder", cx);
        let shard_input = input("processing.shard_placeholder", cx);
        let bid_slot_input = input("processing.slot_placeholder", cx);
        let fee_input = input("processing.fee_placeholder", cx);
        let file_input = input("processing.file_placeholder", cx);

        let mut subscriptions = vec![
            cx.observe(&entities.processing, |_this, _, cx| cx.notify()),
            cx.observe(&entities.i18n, |_this, _, cx| cx.notify()),
        ];

        let bindings: [(&Entity<InputState>, fn(&ProcessingController, String, &mut gpui::App)); 5] = [
            (&slot_input, ProcessingController::set_slot_input),
            (&shard_input, ProcessingController::set_shard_input),
            (&bid_slot_input, ProcessingController::set_bid_slot_input),
            (&fee_input, ProcessingController::set_fee_input),
            (&file_input, ProcessingController::set_file_path),
        ];
        for (state, apply) in bindings {
            subscriptions.push(cx.subscribe(state, move |this, state, event: &InputEvent, cx| {
                if matches!(event, InputEvent::Change) {
                    let value = state.read(cx).value().to_string();
                    apply(&this.controller, value, cx);
                }
            }));
        }

        // Enter in the slot field submits the slot processor
        subscriptions.push(cx.subscribe(&slot_input, |this, _state, event: &InputEvent, cx| {
            if matches!(event, InputEvent::PressEnter { .. }) {
                this.controller.process_slot(cx);
            }
        }));

        Self {
            entities,
            controller,
            slot_input,
            shard_input,
            bid_slot_input,
            fee_input,
            file_input,
            _subscriptions: subscriptions,
        }
    }

    fn render_slot_processor(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.entities.processing.read(cx);
        let form = state.slot_form();
        let situation = form.situation;
        let slot_error = error_text(form.error(), locale);
        let can_process = state.can_process_slot();
        let busy = state.pending() == Some(PendingAction::ProcessSlot);
        let head = state.head();

        let controller = self.controller.clone();
        let situations = RadioGroup::new("situation")
            .options(
                Situation::all()
                    .iter()
                    .map(|situation| (*situation, t(locale, situation.label_key()))),
            )
            .selected(situation)
            .on_select(move |situation, _window, cx| controller.set_situation(situation, cx));

        card(t(locale, "processing.slot_processor"))
            .child(
                div()
                    .text_sm()
                    .text_color(DashColors::text_secondary())
                    .child(match head {
                        Some(head) => format!("{} {head}", t(locale, "processing.head_hint")),
                        None => t(locale, "processing.head_unknown").to_string(),
                    }),
            )
            .child(
                FormField::new(t(locale, "processing.target_slot"), Input::new(&self.slot_input))
                    .error(slot_error),
            )
            .child(FormField::new(t(locale, "processing.situation"), situations))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        Button::primary("process-slot", t(locale, "processing.process"))
                            .disabled(!can_process)
                            .busy(busy, t(locale, "action.sending"))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.process_slot(cx);
                            })),
                    ),
            )
    }

    fn render_init(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.entities.processing.read(cx);
        let busy = state.pending() == Some(PendingAction::InitSimulator);
        let blocked = state.is_busy() && !busy;

        card(t(locale, "processing.init_title"))
            .child(
                div()
                    .text_sm()
                    .text_color(DashColors::text_secondary())
                    .child(t(locale, "processing.init_hint")),
            )
            .child(
                div().child(
                    Button::danger("init-simulator", t(locale, "processing.init"))
                        .disabled(blocked)
                        .busy(busy, t(locale, "action.sending"))
                        .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.controller.init_simulator(cx);
                        })),
                ),
            )
    }

    fn render_bid(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.entities.processing.read(cx);
        let form = state.bid_form();
        let errors = form.errors();
        let commitment = form.commitment().cloned();
        let has_file = !form.file_path.trim().is_empty();
        let can_submit = state.can_submit_bid();
        let pending = state.pending();
        let computing = pending == Some(PendingAction::ComputeCommitment);
        let submitting = pending == Some(PendingAction::SubmitBid);
        let busy = state.is_busy();

        let preview = match commitment {
            Some(commitment) => div()
                .flex()
                .flex_col()
                .gap_1()
                .p_3()
                .rounded_md()
                .bg(DashColors::table_detail_bg())
                .child(cells::section_title(t(locale, "processing.commitment")))
                .child(cells::commitment(&commitment, t(locale, "table.length")))
                .into_any_element(),
            None => cells::none(t(locale, "processing.no_commitment")),
        };

        card(t(locale, "processing.bid_title"))
            .child(
                div()
                    .flex()
                    .items_end()
                    .gap_3()
                    .child(
                        div().flex_1().child(
                            FormField::new(
                                t(locale, "processing.data_file"),
                                Input::new(&self.file_input),
                            )
                            .error(error_text(errors.commitment, locale)),
                        ),
                    )
                    .child(
                        Button::secondary(
                            "compute-commitment",
                            t(locale, "processing.compute_commitment"),
                        )
                        .disabled(!has_file || (busy && !computing))
                        .busy(computing, t(locale, "action.sending"))
                        .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.controller.compute_commitment(cx);
                        })),
                    ),
            )
            .child(preview)
            .child(
                div()
                    .flex()
                    .gap_3()
                    .child(
                        div().flex_1().child(
                            FormField::new(t(locale, "table.shard"), Input::new(&self.shard_input))
                                .error(error_text(errors.shard, locale)),
                        ),
                    )
                    .child(
                        div().flex_1().child(
                            FormField::new(
                                t(locale, "table.slot"),
                                Input::new(&self.bid_slot_input),
                            )
                            .error(error_text(errors.slot, locale)),
                        ),
                    )
                    .child(
                        div().flex_1().child(
                            FormField::new(t(locale, "processing.fee"), Input::new(&self.fee_input))
                                .hint("Gwei")
                                .error(error_text(errors.fee, locale)),
                        ),
                    ),
            )
            .child(
                div().child(
                    Button::primary("submit-bid", t(locale, "processing.submit_bid"))
                        .disabled(!can_submit)
                        .busy(submitting, t(locale, "action.sending"))
                        .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.controller.submit_bid(cx);
                        })),
                ),
            )
    }
}

impl Render for ProcessingPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .id("processing-page")
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            .overflow_y_scroll()
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(t(locale, "nav.processing")),
            )
            .child(
                div()
                    .w_full()
                    .flex()
                    .gap_4()
                    .child(
                        div()
                            .flex_1()
                            .min_w(px(320.0))
                            .child(self.render_slot_processor(locale, cx)),
                    )
                    .child(
                        div()
                            .w(px(320.0))
                            .flex_none()
                            .child(self.render_init(locale, cx)),
                    ),
            )
            .child(self.render_bid(locale, cx))
    }
}
