use iced::{Application, Command, Element, Theme};
use log::info;

use crate::client::models::app_state::{Effect, ExplainerState, ThemeMode};
use crate::client::models::messages::Message;
use crate::client::services::explain_service::{fetch_explanation, ExplainService};

pub struct ExplainerFlags {
    pub service: ExplainService,
    pub theme: ThemeMode,
}

pub struct ExplainerApp {
    pub state: ExplainerState,
    pub service: ExplainService,
}

impl ExplainerApp {
    /// Turns the effect of a state transition into an iced command.
    fn run_effect(&self, effect: Effect) -> Command<Message> {
        match effect {
            Effect::None => Command::none(),
            Effect::Fetch { topic } => {
                let service = self.service.clone();
                Command::perform(fetch_explanation(service, topic), |msg| msg)
            }
            Effect::ClearLogAfter { delay, request_id } => Command::perform(
                async move {
                    tokio::time::sleep(delay).await;
                    Message::ClearLog(request_id)
                },
                |msg| msg,
            ),
        }
    }
}

impl Application for ExplainerApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ExplainerFlags;

    fn new(flags: ExplainerFlags) -> (Self, Command<Message>) {
        info!("[APP] Explainer ready, endpoint {}", flags.service.endpoint());
        let app = ExplainerApp {
            state: ExplainerState::new(flags.theme),
            service: flags.service,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "LaymanLearn".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        let effect = self.state.update(message);
        self.run_effect(effect)
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::explainer::view(&self.state)
    }

    fn theme(&self) -> Theme {
        match self.state.theme {
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
        }
    }
}
