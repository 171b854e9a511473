//! Scenario replay.
//!
//! Feeds a scenario's scripted inputs through a [`CasterRegistry`] the way a
//! game loop would: item-use callbacks first, then the per-tick step. Every
//! packet the session emits is captured together with the tick it was sent on.

use client_core::{
    CastOutcome, CasterRegistry, Outbound, RecordingTransport, SpellCastAction, UseEvent,
};
use game_content::{Scenario, ScenarioEvent};
use game_core::{
    ApplyState, BindingOffer, BindingState, CastConfig, CastEnv, Caster, LinearCastTimer,
    SpellCatalog, SpellId, SpellOracle, offers_for,
};
use serde::Serialize;

use crate::host::ScenarioHost;

/// One captured outbound packet.
#[derive(Clone, Debug, Serialize)]
pub struct IntentRecord {
    pub tick: u32,
    pub channel: &'static str,
    pub packet: Outbound,
}

/// Binding offer for the held item, evaluated for the scripted caster.
#[derive(Clone, Debug, Serialize)]
pub struct OfferRecord {
    pub spell: Option<SpellId>,
    pub offer: BindingOffer,
    pub state: BindingState,
    pub ready_to_apply: bool,
}

/// Everything a replay produced.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ReplayReport {
    pub intents: Vec<IntentRecord>,
    pub offers: Vec<OfferRecord>,
    pub ticks: u32,
}

impl ReplayReport {
    pub fn actions(&self) -> Vec<SpellCastAction> {
        self.intents
            .iter()
            .filter_map(|record| record.packet.as_spell_request())
            .map(|request| request.action)
            .collect()
    }

    pub fn pose_syncs(&self) -> usize {
        self.intents
            .iter()
            .filter(|record| matches!(record.packet, Outbound::PoseSync(_)))
            .count()
    }
}

/// Replays scenarios against a spell catalog.
pub struct Replay<'a> {
    catalog: &'a SpellCatalog,
    timer: LinearCastTimer,
    registry: CasterRegistry,
    transport: RecordingTransport,
    report: ReplayReport,
    remaining_use_ticks: i32,
}

impl<'a> Replay<'a> {
    pub fn new(catalog: &'a SpellCatalog, config: CastConfig) -> Self {
        let timer = LinearCastTimer::default();
        Self {
            catalog,
            timer,
            registry: CasterRegistry::new(config),
            transport: RecordingTransport::new(),
            report: ReplayReport::default(),
            remaining_use_ticks: timer.max_use_ticks,
        }
    }

    /// Runs every scripted event, then evaluates binding offers for the item
    /// left in the caster's main hand.
    pub fn run(mut self, scenario: &Scenario) -> ReplayReport {
        let mut host = ScenarioHost::new(scenario);
        let caster_id = host.entity_id();
        tracing::info!(
            caster = %caster_id,
            events = scenario.events.len(),
            "Replaying scenario"
        );

        for event in &scenario.events {
            tracing::debug!(caster = %caster_id, ?event, "Scenario event");
            match event {
                ScenarioEvent::Select(index) => {
                    self.registry.session_mut(caster_id).select_spell(*index);
                }
                ScenarioEvent::Scroll(delta) => {
                    self.registry.session_mut(caster_id).cycle_spell(*delta);
                }
                ScenarioEvent::Equip(stack) => {
                    if host.is_using_item() {
                        self.use_event(&mut host, Use::Interrupt);
                    }
                    host.equip(*stack);
                }
                ScenarioEvent::Begin => {
                    self.remaining_use_ticks = self.timer.max_use_ticks;
                    self.use_event(&mut host, Use::Begin);
                    self.tick(&host);
                }
                ScenarioEvent::Hold { ticks } => {
                    for _ in 0..*ticks {
                        if host.is_using_item() {
                            self.remaining_use_ticks -= 1;
                            self.use_event(&mut host, Use::Sustain);
                        }
                        self.tick(&host);
                    }
                }
                ScenarioEvent::Release => {
                    if host.is_using_item() {
                        self.use_event(&mut host, Use::Release);
                    }
                    self.tick(&host);
                }
                ScenarioEvent::Interrupt => {
                    self.use_event(&mut host, Use::Interrupt);
                    self.tick(&host);
                }
            }
        }

        self.report.offers = self.offers(&host, scenario.library_power);
        self.report
    }

    fn use_event(&mut self, host: &mut ScenarioHost, kind: Use) {
        let stack = host.main_hand().cloned();
        let remaining_use_ticks = self.remaining_use_ticks;
        let event = match (kind, stack.as_ref()) {
            (Use::Interrupt, _) => UseEvent::Interrupted,
            (_, None) => {
                tracing::warn!(caster = %host.entity_id(), "Nothing held in main hand");
                host.set_using(false);
                return;
            }
            (Use::Begin, Some(stack)) => UseEvent::Begin {
                stack,
                remaining_use_ticks,
            },
            (Use::Sustain, Some(stack)) => UseEvent::Sustain {
                stack,
                remaining_use_ticks,
            },
            (Use::Release, Some(stack)) => UseEvent::Release {
                stack,
                remaining_use_ticks,
            },
        };

        let env = CastEnv::new(self.catalog, &*host, &*host, &*host, &self.timer);
        let outcome = self
            .registry
            .handle(&*host, event, &env, &mut self.transport);

        let casting = self
            .registry
            .session(host.entity_id())
            .is_some_and(|session| session.is_casting());
        let using = match (kind, &outcome) {
            (Use::Interrupt, _) => false,
            (_, CastOutcome::Finished(_)) => false,
            (Use::Release, CastOutcome::Refused) => {
                tracing::info!(caster = %host.entity_id(), "Still channeling, release refused");
                true
            }
            (Use::Release, _) => false,
            _ => casting,
        };
        host.set_using(using);
        self.collect();
    }

    fn tick(&mut self, host: &ScenarioHost) {
        let env = CastEnv::new(self.catalog, host, host, host, &self.timer);
        let casters: [&dyn Caster; 1] = [host];
        self.registry
            .dispatch_tick(&casters, &env, &mut self.transport);
        self.collect();
        self.report.ticks += 1;
    }

    fn collect(&mut self) {
        let tick = self.report.ticks;
        self.report
            .intents
            .extend(self.transport.take().into_iter().map(|packet| IntentRecord {
                tick,
                channel: packet.channel(),
                packet,
            }));
    }

    fn offers(&self, host: &ScenarioHost, library_power: u32) -> Vec<OfferRecord> {
        let Some(stack) = host.main_hand() else {
            return Vec::new();
        };
        offers_for(stack, library_power, self.catalog)
            .into_iter()
            .map(|offer| {
                let state = BindingState::from_raw_id(
                    offer.raw_id,
                    stack,
                    offer.cost,
                    offer.level_requirement,
                    self.catalog,
                );
                let ready_to_apply = state.ready_to_apply(host, host.lapis());
                if state.apply_state == ApplyState::Applicable && !ready_to_apply {
                    tracing::debug!(raw_id = %offer.raw_id, "Offer not affordable");
                }
                OfferRecord {
                    spell: self.catalog.from_raw_id(offer.raw_id).cloned(),
                    offer,
                    state,
                    ready_to_apply,
                }
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Use {
    Begin,
    Sustain,
    Release,
    Interrupt,
}
