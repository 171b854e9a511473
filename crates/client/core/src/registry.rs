//! Per-caster session storage and host callback dispatch.

use std::collections::HashMap;

use game_core::{CastConfig, CastEnv, Caster, EntityId, ItemStack};

use crate::session::{CastOutcome, CastSession};
use crate::transport::Transport;

/// Item-use callbacks forwarded by the host.
#[derive(Clone, Copy, Debug)]
pub enum UseEvent<'a> {
    /// The caster began using `stack`.
    Begin {
        stack: &'a ItemStack,
        remaining_use_ticks: i32,
    },
    /// The caster keeps using `stack` this tick.
    Sustain {
        stack: &'a ItemStack,
        remaining_use_ticks: i32,
    },
    /// The caster stopped using `stack`.
    Release {
        stack: &'a ItemStack,
        remaining_use_ticks: i32,
    },
    /// The use action was stopped externally.
    Interrupted,
}

/// Cast sessions of every known caster.
///
/// Sessions are created lazily from the registry's [`CastConfig`] the first
/// time a caster is seen and live until [`remove`](Self::remove) is called.
#[derive(Debug, Default)]
pub struct CasterRegistry {
    config: CastConfig,
    sessions: HashMap<EntityId, CastSession>,
}

impl CasterRegistry {
    pub fn new(config: CastConfig) -> Self {
        Self {
            config,
            sessions: HashMap::new(),
        }
    }

    pub fn config(&self) -> &CastConfig {
        &self.config
    }

    pub fn session(&self, caster: EntityId) -> Option<&CastSession> {
        self.sessions.get(&caster)
    }

    pub fn session_mut(&mut self, caster: EntityId) -> &mut CastSession {
        let config = &self.config;
        self.sessions
            .entry(caster)
            .or_insert_with(|| CastSession::new(config.clone()))
    }

    pub fn remove(&mut self, caster: EntityId) -> Option<CastSession> {
        self.sessions.remove(&caster)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Routes one item-use callback to the caster's session.
    pub fn handle(
        &mut self,
        caster: &dyn Caster,
        event: UseEvent<'_>,
        env: &CastEnv<'_>,
        transport: &mut dyn Transport,
    ) -> CastOutcome {
        let session = self.session_mut(caster.entity_id());
        match event {
            UseEvent::Begin {
                stack,
                remaining_use_ticks,
            } => session.cast_start(caster, stack, remaining_use_ticks, env, transport),
            UseEvent::Sustain {
                stack,
                remaining_use_ticks,
            } => session.cast_tick(caster, stack, remaining_use_ticks, env, transport),
            UseEvent::Release {
                stack,
                remaining_use_ticks,
            } => session.cast_release(caster, stack, remaining_use_ticks, env, transport),
            UseEvent::Interrupted => {
                session.interrupt();
                CastOutcome::Skipped
            }
        }
    }

    /// Runs the per-tick step for every tracked caster in `casters`.
    ///
    /// Casters without a session have nothing to maintain and are skipped.
    pub fn dispatch_tick(
        &mut self,
        casters: &[&dyn Caster],
        env: &CastEnv<'_>,
        transport: &mut dyn Transport,
    ) {
        for caster in casters {
            if let Some(session) = self.sessions.get_mut(&caster.entity_id()) {
                session.tick(*caster, env, transport);
            }
        }
    }
}
