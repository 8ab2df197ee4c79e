//! Settings Page
//!
//! Server address, list page size and the simulator's mining settings.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, FontWeight, IntoElement, ParentElement,
    Render, SharedString, Styled, Subscription, Window,
};
use gpui_component::input::{Input, InputEvent, InputState};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::form_field::FormField;
use crate::components::primitives::radio_group::RadioGroup;
use crate::components::primitives::switch::Switch;
use crate::domain::simulator::ConfigUpdate;
use crate::domain::slot_window::ROWS_PER_PAGE_OPTIONS;
use crate::features::settings::controller::{
    SettingsController, parse_failure_rate, parse_server, parse_slot_time,
};
use crate::i18n::{t, Locale};
use crate::state::processing_state::FieldError;
use crate::theme::colors::DashColors;

fn section(title: SharedString) -> gpui::Div {
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

fn error_text(error: Option<FieldError>, locale: Locale) -> Option<SharedString> {
    error.map(|error| t(locale, error.message_key()))
}

/// Errors from the last save attempt, cleared when it succeeds
#[derive(Debug, Default, Clone, Copy)]
struct SettingsErrors {
    host: Option<FieldError>,
    port: Option<FieldError>,
    slot_time: Option<FieldError>,
    failure_rate: Option<FieldError>,
}

pub struct SettingsPage {
    entities: AppEntities,
    controller: SettingsController,
    host_input: Entity<InputState>,
    port_input: Entity<InputState>,
    slot_time_input: Entity<InputState>,
    failure_rate_input: Entity<InputState>,
    errors: SettingsErrors,
    _subscriptions: Vec<Subscription>,
}

impl SettingsPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let controller = SettingsController::new(entities.clone());
        let server = entities.config.read(cx).config.server.clone();

        let host_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("localhost")
                .default_value(server.host.clone())
        });
        let port_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("3030")
                .default_value(server.port.to_string())
        });
        let slot_time_input = cx.new(|cx| InputState::new(window, cx).placeholder("12"));
        let failure_rate_input = cx.new(|cx| InputState::new(window, cx).placeholder("0.0"));

        let mut subscriptions = vec![
            cx.observe(&entities.config, |_this, _, cx| cx.notify()),
            cx.observe(&entities.simulator, |_this, _, cx| cx.notify()),
            cx.observe(&entities.i18n, |_this, _, cx| cx.notify()),
        ];
        for state in [&host_input, &port_input] {
            subscriptions.push(cx.subscribe(state, |this, _state, event: &InputEvent, cx| {
                if matches!(event, InputEvent::PressEnter { .. }) {
                    this.save_server(cx);
                }
            }));
        }

        Self {
            entities,
            controller,
            host_input,
            port_input,
            slot_time_input,
            failure_rate_input,
            errors: SettingsErrors::default(),
            _subscriptions: subscriptions,
        }
    }

    fn save_server(&mut self, cx: &mut Context<Self>) {
        let host = self.host_input.read(cx).value().to_string();
        let port = self.port_input.read(cx).value().to_string();

        match parse_server(&host, &port) {
            Ok(server) => {
                self.errors.host = None;
                self.errors.port = None;
                self.controller.apply_server(server, cx);
            }
            Err(error) => {
                if host.trim().is_empty() {
                    self.errors.host = Some(error);
                    self.errors.port = None;
                } else {
                    self.errors.host = None;
                    self.errors.port = Some(error);
                }
            }
        }
        cx.notify();
    }

    fn save_simulator(&mut self, cx: &mut Context<Self>) {
        let slot_time = self.slot_time_input.read(cx).value().to_string();
        let failure_rate = self.failure_rate_input.read(cx).value().to_string();

        // blank fields are left as they are on the simulator
        let slot_time = (!slot_time.trim().is_empty()).then(|| parse_slot_time(&slot_time));
        let failure_rate =
            (!failure_rate.trim().is_empty()).then(|| parse_failure_rate(&failure_rate));

        self.errors.slot_time = slot_time.and_then(Result::err);
        self.errors.failure_rate = failure_rate.and_then(Result::err);
        cx.notify();

        if self.errors.slot_time.is_some() || self.errors.failure_rate.is_some() {
            return;
        }
        let update = ConfigUpdate {
            auto: None,
            slot_time: slot_time.and_then(Result::ok),
            failure_rate: failure_rate.and_then(Result::ok),
        };
        if update != ConfigUpdate::default() {
            self.controller.update_simulator(update, cx);
        }
    }

    fn render_server(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let config = self.entities.config.read(cx);
        let base_url = config.base_url();
        let path = config.path.clone();

        section(t(locale, "settings.server"))
            .child(
                div()
                    .flex()
                    .gap_3()
                    .child(
                        div().flex_1().child(
                            FormField::new(t(locale, "settings.host"), Input::new(&self.host_input))
                                .error(error_text(self.errors.host, locale)),
                        ),
                    )
                    .child(
                        div().w(px(160.0)).child(
                            FormField::new(t(locale, "settings.port"), Input::new(&self.port_input))
                                .error(error_text(self.errors.port, locale)),
                        ),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        Button::primary("save-server", t(locale, "action.save")).on_click(
                            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.save_server(cx);
                            }),
                        ),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(DashColors::text_secondary())
                            .child(format!("{}: {base_url}", t(locale, "settings.current_server"))),
                    ),
            )
            .when_some(path, |el, path| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(DashColors::text_muted())
                        .child(format!("{}: {path}", t(locale, "settings.config_file"))),
                )
            })
    }

    fn render_display(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let rows = self.entities.config.read(cx).config.rows_per_page;
        let controller = self.controller.clone();

        section(t(locale, "settings.display")).child(FormField::new(
            t(locale, "pagination.per_page"),
            RadioGroup::new("rows-per-page")
                .horizontal()
                .options(
                    ROWS_PER_PAGE_OPTIONS
                        .iter()
                        .map(|count| (*count, SharedString::from(count.to_string()))),
                )
                .selected(rows)
                .on_select(move |rows, _window, cx| controller.set_rows_per_page(rows, cx)),
        ))
    }

    fn render_simulator(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let simulator = self.entities.simulator.read(cx);
        let config = simulator.config();
        let updating = simulator.is_updating();
        let auto = config.is_some_and(|config| config.auto);
        let controller = self.controller.clone();

        let current = match config {
            Some(config) => format!(
                "{}: {} s, {}: {}",
                t(locale, "settings.slot_time"),
                config.slot_time,
                t(locale, "settings.failure_rate"),
                config.failure_rate
            ),
            None => t(locale, "settings.simulator_unknown").to_string(),
        };

        section(t(locale, "settings.simulator"))
            .child(
                Switch::new("auto-mining")
                    .on(auto)
                    .label(t(locale, "settings.auto_mining"))
                    .disabled(updating || config.is_none())
                    .on_change(move |on, _window, cx| {
                        controller.update_simulator(ConfigUpdate::auto(on), cx)
                    }),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(DashColors::text_secondary())
                    .child(current),
            )
            .child(
                div()
                    .flex()
                    .gap_3()
                    .child(
                        div().flex_1().child(
                            FormField::new(
                                t(locale, "settings.slot_time"),
                                Input::new(&self.slot_time_input),
                            )
                            .hint(t(locale, "settings.seconds"))
                            .error(error_text(self.errors.slot_time, locale)),
                        ),
                    )
                    .child(
                        div().flex_1().child(
                            FormField::new(
                                t(locale, "settings.failure_rate"),
                                Input::new(&self.failure_rate_input),
                            )
                            .hint("0.0 - 1.0")
                            .error(error_text(self.errors.failure_rate, locale)),
                        ),
                    ),
            )
            .child(
                div()
                    .flex()
                    .gap_3()
                    .child(
                        Button::primary("apply-simulator", t(locale, "action.apply"))
                            .busy(updating, t(locale, "action.sending"))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.save_simulator(cx);
                            })),
                    )
                    .child(
                        Button::ghost("reload-simulator", t(locale, "action.refresh"))
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.refresh_simulator_config(cx);
                            })),
                    ),
            )
    }
}

impl Render for SettingsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .id("settings-page")
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
                    .child(t(locale, "nav.settings")),
            )
            .child(self.render_server(locale, cx))
            .child(self.render_display(locale, cx))
            .child(self.render_simulator(locale, cx))
    }
}
