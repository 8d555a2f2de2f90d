use crux_core::{render::render, Command};

use crate::api_get;
use crate::update_field;
use crate::events::{Event, ListEvent};
use crate::model::Model;
use crate::types::{Gateway, SearchOutcome};
use crate::{Effect, KeyValueCmd, KeyValueOutput, TimerCmd, TimerOutput};

/// Local-storage key holding the serialized gateway list
pub const GATEWAY_LIST_KEY: &str = "gatewayListData";

/// Fixed refresh cycle; no backoff or jitter
pub const REFRESH_INTERVAL_MS: u64 = 10 * 60 * 1000;

pub const REFRESH_TIMER_ID: usize = 1;

/// Handle gateway list events (cache, refresh, search, pagination)
pub fn handle(event: ListEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Mount: read the cache first, fetch only on a miss; arm the refresh timer
        ListEvent::Mount => {
            model.start_loading();
            Command::all([
                render(),
                KeyValueCmd::get(GATEWAY_LIST_KEY)
                    .build()
                    .then_send(|output| {
                        let value = match output {
                            KeyValueOutput::Value { value } => value,
                            _ => None,
                        };
                        Event::List(ListEvent::CacheLoaded(value))
                    }),
                arm_refresh_timer(),
            ])
        }

        ListEvent::Unmount => TimerCmd::cancel(REFRESH_TIMER_ID)
            .build()
            .then_send(|_| Event::List(ListEvent::RefreshCancelled)),

        ListEvent::CacheLoaded(Some(json)) => match serde_json::from_str::<Vec<Gateway>>(&json) {
            Ok(gateways) => {
                model.stop_loading();
                model.apply_gateways(gateways);
                render()
            }
            // Unreadable cache entry counts as a miss
            Err(e) => {
                log::warn!("discarding cached gateway list: {e}");
                fetch_gateways(model)
            }
        },

        ListEvent::CacheLoaded(None) => fetch_gateways(model),

        ListEvent::FetchGateways => fetch_gateways(model),

        ListEvent::FetchGatewaysResponse(result) => match result {
            Ok(gateways) => {
                model.stop_loading();
                let serialized = serde_json::to_string(&gateways);
                model.apply_gateways(gateways);
                match serialized {
                    Ok(json) => Command::all([
                        render(),
                        KeyValueCmd::set(GATEWAY_LIST_KEY, json)
                            .build()
                            .then_send(|_| Event::List(ListEvent::CacheWritten)),
                    ]),
                    Err(e) => {
                        log::error!("failed to serialize gateway list for cache: {e}");
                        render()
                    }
                }
            }
            // Transient: keep whatever the model already holds
            Err(e) => model.set_error_and_render(e.to_string()),
        },

        ListEvent::CacheWritten | ListEvent::CacheCleared => Command::done(),

        // Tick: invalidate the cache, re-fetch, re-arm
        ListEvent::RefreshFired => Command::all([
            KeyValueCmd::clear(GATEWAY_LIST_KEY)
                .build()
                .then_send(|_| Event::List(ListEvent::CacheCleared)),
            fetch_gateways(model),
            arm_refresh_timer(),
        ]),

        ListEvent::RefreshCancelled => Command::done(),

        ListEvent::Search { serial_number } => handle_search(serial_number, model),

        ListEvent::ClearSearch => update_field!(model.search_result, None),

        ListEvent::SetPage { page } => {
            update_field!(model.page, page.min(model.page_count() - 1))
        }

        ListEvent::NextPage => {
            update_field!(model.page, (model.page + 1).min(model.page_count() - 1))
        }

        ListEvent::PrevPage => update_field!(model.page, model.page.saturating_sub(1)),
    }
}

fn fetch_gateways(model: &mut Model) -> Command<Effect, Event> {
    api_get!(
        List,
        ListEvent,
        model,
        "/getalldata",
        FetchGatewaysResponse,
        "Load gateways",
        expect_json: Vec<Gateway>
    )
}

fn arm_refresh_timer() -> Command<Effect, Event> {
    TimerCmd::start(REFRESH_TIMER_ID, REFRESH_INTERVAL_MS)
        .build()
        .then_send(|output| match output {
            TimerOutput::Fired { .. } => Event::List(ListEvent::RefreshFired),
            TimerOutput::Cancelled { .. } => Event::List(ListEvent::RefreshCancelled),
        })
}

/// Linear scan by exact serial number; first match wins.
///
/// A hit flips the matched gateway's status flag in the model only; the
/// mutation is never written back to the cache or the registry.
fn handle_search(serial_number: String, model: &mut Model) -> Command<Effect, Event> {
    match model
        .gateways
        .iter_mut()
        .find(|g| g.serial_number == serial_number)
    {
        Some(gateway) => {
            gateway.status = !gateway.status;
            model.search_result = Some(SearchOutcome::Found {
                gateway: gateway.clone(),
            });
        }
        None => {
            model.search_result = Some(SearchOutcome::NotFound { serial_number });
        }
    }

    render()
}
