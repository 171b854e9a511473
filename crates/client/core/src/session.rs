//! Per-caster casting state machine.
//!
//! A [`CastSession`] is driven by host callbacks: the item-use callbacks map
//! to [`cast_start`](CastSession::cast_start),
//! [`cast_tick`](CastSession::cast_tick) and
//! [`cast_release`](CastSession::cast_release), and the per-tick callback maps
//! to [`tick`](CastSession::tick). Every transition emits at most one
//! [`SpellRequest`]; progress and channel cadence come from the
//! [`CastTimer`](game_core::CastTimer) in the [`CastEnv`].
//!
//! Transport failures never roll a transition back. The authority
//! re-validates every request, so the session stays optimistic.

use game_core::{
    CastConfig, CastEnv, Caster, EntityId, ItemStack, Spell, SpellContainer, SpellId,
    SpellOracle,
};

use crate::message::{Outbound, PoseSync, SpellCastAction, SpellRequest};
use crate::targeting;
use crate::transport::Transport;

/// What a cast transition did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CastOutcome {
    /// Nothing to do: no current spell, no container, or no intent due.
    Skipped,
    /// A channeled cast was released before it was fully charged and keeps going.
    Refused,
    /// An intent was sent and the cast continues.
    Sent(SpellRequest),
    /// A RELEASE was sent; the host should stop the use action.
    Finished(SpellRequest),
}

impl CastOutcome {
    pub fn should_stop_using(&self) -> bool {
        matches!(self, Self::Finished(_))
    }

    pub fn request(&self) -> Option<&SpellRequest> {
        match self {
            Self::Sent(request) | Self::Finished(request) => Some(request),
            Self::Skipped | Self::Refused => None,
        }
    }
}

/// Casting state of one caster.
#[derive(Clone, Debug, Default)]
pub struct CastSession {
    config: CastConfig,
    selected_spell_index: i32,
    current_spell: Option<SpellId>,
    targets: Vec<EntityId>,
}

impl CastSession {
    pub fn new(config: CastConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &CastConfig {
        &self.config
    }

    // ===== selection =====

    /// Container of the stack in the caster's main hand.
    pub fn current_container(caster: &dyn Caster) -> Option<&SpellContainer> {
        caster.main_hand()?.spell_container()
    }

    /// Selection mapped onto `container`.
    pub fn selected_spell_index(&self, container: &SpellContainer) -> usize {
        container.capped_index(self.selected_spell_index)
    }

    pub fn select_spell(&mut self, index: i32) {
        self.selected_spell_index = index;
    }

    /// Scrolls the selection; capping wraps it around the container.
    pub fn cycle_spell(&mut self, delta: i32) {
        self.selected_spell_index = self.selected_spell_index.wrapping_add(delta);
    }

    /// Spell the caster would start casting with the main-hand stack.
    pub fn selected_spell_id<'c>(&self, caster: &'c dyn Caster) -> Option<&'c SpellId> {
        Self::current_container(caster)?.spell_id_at(self.selected_spell_index)
    }

    // ===== cast state =====

    pub fn current_spell(&self) -> Option<&SpellId> {
        self.current_spell.as_ref()
    }

    pub fn is_casting(&self) -> bool {
        self.current_spell.is_some()
    }

    pub fn current_targets(&self) -> &[EntityId] {
        &self.targets
    }

    pub fn current_first_target(&self) -> Option<EntityId> {
        self.targets.first().copied()
    }

    /// Whether the caster is holding a beam-shaped cast.
    pub fn is_beaming(&self, caster: &dyn Caster, spells: &dyn SpellOracle) -> bool {
        caster.is_using_item()
            && self
                .current_spell
                .as_ref()
                .and_then(|id| spells.spell(id))
                .is_some_and(|spell| spell.release.is_beam())
    }

    // ===== advisory checks =====

    /// Whether the selected spell is cooling down. Never blocks START.
    pub fn is_on_cooldown(&self, caster: &dyn Caster, env: &CastEnv<'_>) -> bool {
        self.selected_spell_id(caster)
            .is_some_and(|id| env.cooldowns().is_cooling_down(id))
    }

    /// Whether the caster holds the ammo the selected spell needs. Never
    /// blocks START.
    pub fn has_ammo_to_start(&self, caster: &dyn Caster, env: &CastEnv<'_>) -> bool {
        let Some(stack) = caster.main_hand() else {
            return false;
        };
        let Some(spell) = self
            .selected_spell_id(caster)
            .and_then(|id| env.spells().spell(id))
        else {
            return false;
        };
        env.ammo().ammo_for(caster, spell, stack).satisfied()
    }

    // ===== transitions =====

    /// Host began using `stack`: announce the selected spell.
    pub fn cast_start(
        &mut self,
        caster: &dyn Caster,
        stack: &ItemStack,
        remaining_use_ticks: i32,
        env: &CastEnv<'_>,
        transport: &mut dyn Transport,
    ) -> CastOutcome {
        let caster_id = caster.entity_id();
        let Some(container) = stack.spell_container().filter(|c| !c.is_empty()) else {
            tracing::debug!(caster = %caster_id, "No spells bound to used stack, not casting");
            return CastOutcome::Skipped;
        };
        let Some(spell_id) = container.spell_id_at(self.selected_spell_index) else {
            return CastOutcome::Skipped;
        };
        let Some(raw_id) = env.spells().raw_id(spell_id) else {
            tracing::debug!(
                caster = %caster_id,
                spell = %spell_id,
                "Selected spell is not registered, not casting"
            );
            return CastOutcome::Skipped;
        };

        let request = SpellRequest::new(
            SpellCastAction::Start,
            raw_id,
            slot_of(caster, stack),
            remaining_use_ticks,
            &[],
        );
        self.send(caster_id, transport, request.clone().into());
        self.current_spell = Some(spell_id.clone());

        tracing::debug!(caster = %caster_id, spell = %spell_id, "Cast started");
        CastOutcome::Sent(request)
    }

    /// Host reports another tick of use: refresh targets and emit a CHANNEL
    /// or RELEASE when one is due.
    pub fn cast_tick(
        &mut self,
        caster: &dyn Caster,
        stack: &ItemStack,
        remaining_use_ticks: i32,
        env: &CastEnv<'_>,
        transport: &mut dyn Transport,
    ) -> CastOutcome {
        let Some(spell) = self.current_definition(env) else {
            return CastOutcome::Skipped;
        };

        self.refresh_targets(caster, spell, env);
        let timer = env.timer();
        let progress = timer.progress(caster, remaining_use_ticks, spell);

        if timer.is_channeled(spell) {
            if progress >= 1.0 {
                return self.release(caster, stack, remaining_use_ticks, spell, env, transport);
            }
            if !timer.is_channel_tick_due(spell, remaining_use_ticks) {
                return CastOutcome::Skipped;
            }
            let Some(raw_id) = env.spells().raw_id(&spell.id) else {
                return CastOutcome::Skipped;
            };
            let request = SpellRequest::new(
                SpellCastAction::Channel,
                raw_id,
                slot_of(caster, stack),
                remaining_use_ticks,
                targeting::wire_targets(spell, &self.targets),
            );
            self.send(caster.entity_id(), transport, request.clone().into());
            tracing::debug!(
                caster = %caster.entity_id(),
                spell = %spell.id,
                shape = %spell.release.kind(),
                progress,
                targets = self.targets.len(),
                "Channel tick"
            );
            return CastOutcome::Sent(request);
        }

        if self.config.auto_release && progress >= 1.0 {
            return self.release(caster, stack, remaining_use_ticks, spell, env, transport);
        }

        CastOutcome::Skipped
    }

    /// Host stopped using `stack`: release the current spell.
    ///
    /// A channeled spell released before it is fully charged is refused and
    /// left untouched.
    pub fn cast_release(
        &mut self,
        caster: &dyn Caster,
        stack: &ItemStack,
        remaining_use_ticks: i32,
        env: &CastEnv<'_>,
        transport: &mut dyn Transport,
    ) -> CastOutcome {
        let Some(spell) = self.current_definition(env) else {
            return CastOutcome::Skipped;
        };

        let timer = env.timer();
        if timer.is_channeled(spell) && timer.progress(caster, remaining_use_ticks, spell) < 1.0 {
            tracing::debug!(
                caster = %caster.entity_id(),
                spell = %spell.id,
                "Channeled spell released early, keeping cast"
            );
            return CastOutcome::Refused;
        }

        self.refresh_targets(caster, spell, env);
        self.release(caster, stack, remaining_use_ticks, spell, env, transport)
    }

    /// Per-tick maintenance, called whether or not the caster is casting.
    ///
    /// Clears targets while the caster is not using an item and streams the
    /// caster's pose while a beam is held.
    pub fn tick(&mut self, caster: &dyn Caster, env: &CastEnv<'_>, transport: &mut dyn Transport) {
        if !caster.is_using_item() && !self.targets.is_empty() {
            tracing::trace!(caster = %caster.entity_id(), "Not using an item, clearing targets");
            self.targets.clear();
        }

        if self.is_beaming(caster, env.spells()) {
            let sync = PoseSync {
                entity: caster.entity_id(),
                pose: caster.pose(),
            };
            self.send(caster.entity_id(), transport, sync.into());
        }
    }

    /// The host observed the use action stop without a release: drop the
    /// cast silently.
    pub fn interrupt(&mut self) {
        if let Some(spell) = self.current_spell.take() {
            tracing::debug!(spell = %spell, "Cast interrupted");
        }
        self.targets.clear();
    }

    // ===== helpers =====

    fn current_definition<'e>(&self, env: &CastEnv<'e>) -> Option<&'e Spell> {
        let id = self.current_spell.as_ref()?;
        let spell = env.spells().spell(id);
        if spell.is_none() {
            tracing::debug!(spell = %id, "Current spell is not registered");
        }
        spell
    }

    fn refresh_targets(&mut self, caster: &dyn Caster, spell: &Spell, env: &CastEnv<'_>) {
        // The caster itself is a fallback, not an acquired target.
        let previous_first = self
            .current_first_target()
            .filter(|target| *target != caster.entity_id());
        self.targets = targeting::resolve(caster, Some(spell), previous_first, env.world());
    }

    fn release(
        &mut self,
        caster: &dyn Caster,
        stack: &ItemStack,
        remaining_use_ticks: i32,
        spell: &Spell,
        env: &CastEnv<'_>,
        transport: &mut dyn Transport,
    ) -> CastOutcome {
        let Some(raw_id) = env.spells().raw_id(&spell.id) else {
            tracing::debug!(
                caster = %caster.entity_id(),
                spell = %spell.id,
                "Current spell has no raw id, not releasing"
            );
            return CastOutcome::Skipped;
        };
        let request = SpellRequest::new(
            SpellCastAction::Release,
            raw_id,
            slot_of(caster, stack),
            remaining_use_ticks,
            targeting::wire_targets(spell, &self.targets),
        );
        self.send(caster.entity_id(), transport, request.clone().into());
        self.current_spell = None;

        tracing::info!(
            caster = %caster.entity_id(),
            spell = %spell.id,
            shape = %spell.release.kind(),
            targets = request.target_ids.len(),
            "Spell released"
        );
        CastOutcome::Finished(request)
    }

    fn send(&self, caster: EntityId, transport: &mut dyn Transport, packet: Outbound) {
        let channel = packet.channel();
        if let Err(e) = transport.send(packet) {
            tracing::warn!(caster = %caster, channel, "Failed to send packet: {}", e);
        }
    }
}

/// Inventory slot holding exactly `stack`, or `-1`.
fn slot_of(caster: &dyn Caster, stack: &ItemStack) -> i32 {
    caster
        .inventory_slot_of(stack.handle)
        .and_then(|slot| i32::try_from(slot).ok())
        .unwrap_or(-1)
}
