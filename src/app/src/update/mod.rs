mod device;
mod gateway;
mod list;
mod ui;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Gateway(event) => gateway::handle(event, model),
        Event::Device(event) => device::handle(event, model),
        Event::List(event) => list::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}
