mod common;

use client_core::{
    CastOutcome, CastSession, Outbound, RecordingTransport, SpellCastAction, SpellRequest,
};
use common::{FakeCaster, FixedTimer, Host, MAX_USE, id, pose_syncs, requests, staff};
use game_core::{
    CastConfig, CastEnv, EntityId, ItemHandle, PoolId, RawSpellId, Spell, SpellCatalog,
    SpellContainer, SpellId, SpellOracle, SpellPool, StackHandle,
};

fn session() -> CastSession {
    CastSession::new(CastConfig::default())
}

/// Starts casting the spell at `index` of a staff bound with `spells`.
fn begin(
    host: &Host<impl game_core::CastTimer>,
    spells: &[&str],
    index: i32,
) -> (CastSession, FakeCaster, RecordingTransport) {
    let mut session = session();
    let mut caster = FakeCaster::holding(staff(spells));
    let mut transport = RecordingTransport::new();
    session.select_spell(index);
    caster.using = true;
    let stack = caster.stack().clone();
    session.cast_start(&caster, &stack, MAX_USE, &host.env(), &mut transport);
    (session, caster, transport)
}

#[test]
fn start_announces_selected_spell() {
    let host = Host::new();
    let (session, _caster, transport) = begin(&host, &["bolt", "heal"], 1);

    assert_eq!(
        requests(&transport),
        vec![SpellRequest {
            action: SpellCastAction::Start,
            spell_id: 1,
            slot: 1,
            remaining_use_ticks: MAX_USE,
            target_ids: vec![],
        }]
    );
    assert_eq!(session.current_spell(), Some(&id("heal")));
}

#[test]
fn start_uses_capped_selection() {
    let host = Host::new();
    let (session, _caster, transport) = begin(&host, &["bolt", "heal", "nova"], -1);

    assert_eq!(requests(&transport)[0].spell_id, 3);
    assert_eq!(session.current_spell(), Some(&id("nova")));
}

#[test]
fn start_without_spells_is_a_no_op() {
    let host = Host::new();
    let mut session = session();
    let stack = game_core::ItemStack::new(StackHandle(1), ItemHandle(100))
        .with_container(SpellContainer::new(2));
    let caster = FakeCaster::holding(stack.clone());
    let mut transport = RecordingTransport::new();

    let outcome = session.cast_start(&caster, &stack, MAX_USE, &host.env(), &mut transport);

    assert_eq!(outcome, CastOutcome::Skipped);
    assert!(transport.sent().is_empty());
    assert!(session.current_spell().is_none());
}

#[test]
fn start_with_unregistered_spell_is_a_no_op() {
    let host = Host::new();
    let (session, _caster, transport) = begin(&host, &["forgotten"], 0);

    assert!(transport.sent().is_empty());
    assert!(!session.is_casting());
}

#[test]
fn slot_is_negative_when_stack_is_not_in_inventory() {
    let host = Host::new();
    let mut session = session();
    let mut caster = FakeCaster::holding(staff(&["bolt"]));
    caster.inventory.clear();
    let mut transport = RecordingTransport::new();
    let stack = caster.stack().clone();

    session.cast_start(&caster, &stack, MAX_USE, &host.env(), &mut transport);

    assert_eq!(requests(&transport)[0].slot, -1);
}

#[test]
fn slot_matches_stack_identity_not_contents() {
    let host = Host::new();
    let mut session = session();
    let caster = FakeCaster::holding(staff(&["bolt"]));
    let mut transport = RecordingTransport::new();
    let mut twin = caster.stack().clone();
    twin.handle = StackHandle(99);

    session.cast_start(&caster, &twin, MAX_USE, &host.env(), &mut transport);

    assert_eq!(requests(&transport)[0].slot, -1);
}

#[test]
fn charged_cast_waits_for_host_release() {
    let mut host = Host::new();
    host.world.raycast = Some(EntityId(42));
    let (mut session, caster, mut transport) = begin(&host, &["bolt"], 0);
    let stack = caster.stack().clone();

    let outcome = session.cast_tick(&caster, &stack, MAX_USE - 25, &host.env(), &mut transport);
    assert_eq!(outcome, CastOutcome::Skipped);
    assert_eq!(requests(&transport).len(), 1);
    assert!(session.is_casting());

    let outcome = session.cast_release(&caster, &stack, MAX_USE - 25, &host.env(), &mut transport);
    assert!(outcome.should_stop_using());
    let release = outcome.request().unwrap();
    assert_eq!(release.action, SpellCastAction::Release);
    assert_eq!(release.target_ids, vec![42]);
    assert!(!session.is_casting());
}

#[test]
fn auto_release_fires_once_fully_charged() {
    let host = Host::new();
    let mut session = CastSession::new(CastConfig::with_auto_release(true));
    let mut caster = FakeCaster::holding(staff(&["bolt"]));
    caster.using = true;
    let stack = caster.stack().clone();
    let mut transport = RecordingTransport::new();

    session.cast_start(&caster, &stack, MAX_USE, &host.env(), &mut transport);
    let early = session.cast_tick(&caster, &stack, MAX_USE - 19, &host.env(), &mut transport);
    let full = session.cast_tick(&caster, &stack, MAX_USE - 20, &host.env(), &mut transport);

    assert_eq!(early, CastOutcome::Skipped);
    assert!(matches!(full, CastOutcome::Finished(ref r) if r.action == SpellCastAction::Release));
    assert_eq!(requests(&transport).len(), 2);
}

#[test]
fn non_channeled_release_ignores_progress() {
    let host = Host::new();
    let (mut session, caster, mut transport) = begin(&host, &["bolt"], 0);
    let stack = caster.stack().clone();

    let outcome = session.cast_release(&caster, &stack, MAX_USE - 2, &host.env(), &mut transport);

    assert!(outcome.should_stop_using());
    assert_eq!(requests(&transport).len(), 2);
}

#[test]
fn early_channel_release_is_refused() {
    let host = Host::with_timer(FixedTimer {
        progress: 0.6,
        channel_due: false,
    });
    let (mut session, caster, mut transport) = begin(&host, &["breath"], 0);
    let stack = caster.stack().clone();

    let outcome = session.cast_release(&caster, &stack, MAX_USE - 36, &host.env(), &mut transport);

    assert_eq!(outcome, CastOutcome::Refused);
    assert_eq!(requests(&transport).len(), 1);
    assert_eq!(session.current_spell(), Some(&id("breath")));
}

#[test]
fn channel_intents_follow_cadence() {
    let mut host = Host::new();
    host.world.ray = vec![EntityId(3), EntityId(4)];
    let (mut session, caster, mut transport) = begin(&host, &["breath"], 0);
    let stack = caster.stack().clone();

    for elapsed in 1..=12 {
        session.cast_tick(&caster, &stack, MAX_USE - elapsed, &host.env(), &mut transport);
    }

    let channels: Vec<SpellRequest> = requests(&transport)
        .into_iter()
        .filter(|r| r.action == SpellCastAction::Channel)
        .collect();
    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0].remaining_use_ticks, MAX_USE - 5);
    assert_eq!(channels[1].remaining_use_ticks, MAX_USE - 10);
    assert_eq!(channels[0].target_ids, vec![3, 4]);
}

#[test]
fn channel_finishes_at_full_progress() {
    let host = Host::new();
    let (mut session, caster, mut transport) = begin(&host, &["breath"], 0);
    let stack = caster.stack().clone();

    let outcome = session.cast_tick(&caster, &stack, MAX_USE - 60, &host.env(), &mut transport);

    assert!(outcome.should_stop_using());
    assert_eq!(outcome.request().unwrap().action, SpellCastAction::Release);
    assert!(!session.is_casting());
}

#[test]
fn area_release_keeps_every_target_in_order() {
    let mut host = Host::new();
    host.world.area = vec![EntityId(7), EntityId(5), EntityId(6)];
    let (mut session, caster, mut transport) = begin(&host, &["nova"], 0);
    let stack = caster.stack().clone();

    let outcome = session.cast_release(&caster, &stack, MAX_USE - 10, &host.env(), &mut transport);

    assert_eq!(outcome.request().unwrap().target_ids, vec![7, 5, 6]);
}

#[test]
fn cursor_falls_back_to_caster_without_prior_target() {
    let host = Host::new();
    let (mut session, caster, mut transport) = begin(&host, &["heal"], 0);
    let stack = caster.stack().clone();

    session.cast_tick(&caster, &stack, MAX_USE - 3, &host.env(), &mut transport);
    assert_eq!(session.current_targets(), &[caster.id]);

    let outcome = session.cast_release(&caster, &stack, MAX_USE - 3, &host.env(), &mut transport);
    assert_eq!(outcome.request().unwrap().target_ids, vec![caster.id.0]);
}

#[test]
fn cursor_fallback_is_stable_while_held() {
    let host = Host::new();
    let (mut session, caster, mut transport) = begin(&host, &["heal"], 0);
    let stack = caster.stack().clone();

    for elapsed in 1..=6 {
        session.cast_tick(&caster, &stack, MAX_USE - elapsed, &host.env(), &mut transport);
        assert_eq!(session.current_targets(), &[caster.id], "tick {elapsed}");
    }
}

#[test]
fn cursor_does_not_fall_back_after_acquiring_a_target() {
    let mut host = Host::new();
    host.world.raycast = Some(EntityId(9));
    let (mut session, caster, mut transport) = begin(&host, &["heal"], 0);
    let stack = caster.stack().clone();

    session.cast_tick(&caster, &stack, MAX_USE - 1, &host.env(), &mut transport);
    assert_eq!(session.current_first_target(), Some(EntityId(9)));

    host.world.raycast = None;
    session.cast_tick(&caster, &stack, MAX_USE - 2, &host.env(), &mut transport);
    assert!(session.current_targets().is_empty());
}

#[test]
fn cursor_without_fallback_may_have_no_target() {
    let host = Host::new();
    let (mut session, caster, mut transport) = begin(&host, &["mark"], 0);
    let stack = caster.stack().clone();

    let outcome = session.cast_release(&caster, &stack, MAX_USE - 1, &host.env(), &mut transport);

    assert!(outcome.request().unwrap().target_ids.is_empty());
}

#[test]
fn tick_clears_targets_only_when_not_using() {
    let mut host = Host::new();
    host.world.raycast = Some(EntityId(9));
    let (mut session, mut caster, mut transport) = begin(&host, &["bolt"], 0);
    let stack = caster.stack().clone();
    session.cast_tick(&caster, &stack, MAX_USE - 1, &host.env(), &mut transport);

    session.tick(&caster, &host.env(), &mut transport);
    assert_eq!(session.current_targets(), &[EntityId(9)]);

    caster.using = false;
    session.tick(&caster, &host.env(), &mut transport);
    assert!(session.current_targets().is_empty());
    assert!(session.is_casting());
}

#[test]
fn beam_streams_pose_while_used() {
    let host = Host::new();
    let (mut session, mut caster, mut transport) = begin(&host, &["breath"], 0);

    for _ in 0..3 {
        session.tick(&caster, &host.env(), &mut transport);
    }
    assert_eq!(pose_syncs(&transport), 3);
    assert!(matches!(
        transport.sent().last(),
        Some(Outbound::PoseSync(sync)) if sync.pose == caster.pose && sync.entity == caster.id
    ));

    caster.using = false;
    session.tick(&caster, &host.env(), &mut transport);
    assert_eq!(pose_syncs(&transport), 3);
}

#[test]
fn non_beam_casts_do_not_stream_pose() {
    let host = Host::new();
    let (mut session, caster, mut transport) = begin(&host, &["bolt"], 0);

    session.tick(&caster, &host.env(), &mut transport);

    assert_eq!(pose_syncs(&transport), 0);
}

#[test]
fn interrupt_drops_cast_silently() {
    let mut host = Host::new();
    host.world.raycast = Some(EntityId(2));
    let (mut session, caster, mut transport) = begin(&host, &["bolt"], 0);
    let stack = caster.stack().clone();
    session.cast_tick(&caster, &stack, MAX_USE - 1, &host.env(), &mut transport);

    session.interrupt();

    assert!(!session.is_casting());
    assert!(session.current_targets().is_empty());
    assert_eq!(requests(&transport).len(), 1);
}

#[test]
fn idle_session_ignores_sustain_and_release() {
    let host = Host::new();
    let mut session = session();
    let caster = FakeCaster::holding(staff(&["bolt"]));
    let stack = caster.stack().clone();
    let mut transport = RecordingTransport::new();

    let tick = session.cast_tick(&caster, &stack, MAX_USE - 1, &host.env(), &mut transport);
    let release = session.cast_release(&caster, &stack, MAX_USE - 1, &host.env(), &mut transport);

    assert_eq!(tick, CastOutcome::Skipped);
    assert_eq!(release, CastOutcome::Skipped);
    assert!(transport.sent().is_empty());
}

#[test]
fn failed_send_still_transitions() {
    let host = Host::new();
    let mut session = session();
    let caster = FakeCaster::holding(staff(&["bolt"]));
    let stack = caster.stack().clone();
    let mut transport = RecordingTransport::new();
    transport.close();

    let outcome = session.cast_start(&caster, &stack, MAX_USE, &host.env(), &mut transport);

    assert!(matches!(outcome, CastOutcome::Sent(_)));
    assert_eq!(session.current_spell(), Some(&id("bolt")));
    assert!(transport.sent().is_empty());
}

#[test]
fn selection_wraps_around_container() {
    let mut session = session();
    let caster = FakeCaster::holding(staff(&["bolt", "heal", "nova"]));
    let container = CastSession::current_container(&caster).unwrap();

    session.cycle_spell(-1);
    assert_eq!(session.selected_spell_index(container), 2);
    session.cycle_spell(2);
    assert_eq!(session.selected_spell_index(container), 1);
    assert_eq!(session.selected_spell_id(&caster), Some(&id("heal")));
}

#[test]
fn advisory_checks_do_not_block_start() {
    let mut host = Host::new();
    host.cooldowns.0.push(id("bolt"));
    host.ammo.required = Some((ItemHandle(7), false));
    let mut session = session();
    let caster = FakeCaster::holding(staff(&["bolt"]));
    let stack = caster.stack().clone();
    let mut transport = RecordingTransport::new();

    assert!(session.is_on_cooldown(&caster, &host.env()));
    assert!(!session.has_ammo_to_start(&caster, &host.env()));

    session.cast_start(&caster, &stack, MAX_USE, &host.env(), &mut transport);
    assert_eq!(requests(&transport).len(), 1);
}

#[test]
fn ammo_is_satisfied_when_not_required() {
    let host = Host::new();
    let session = session();
    let caster = FakeCaster::holding(staff(&["bolt"]));

    assert!(session.has_ammo_to_start(&caster, &host.env()));
    assert!(!session.is_on_cooldown(&caster, &host.env()));
}

/// Registry that knows definitions but has no wire ids for them.
struct UnnumberedSpells(SpellCatalog);

impl SpellOracle for UnnumberedSpells {
    fn spell(&self, id: &SpellId) -> Option<&Spell> {
        self.0.spell(id)
    }

    fn raw_id(&self, _id: &SpellId) -> Option<RawSpellId> {
        None
    }

    fn from_raw_id(&self, _raw: RawSpellId) -> Option<&SpellId> {
        None
    }

    fn pool(&self, id: &PoolId) -> Option<&SpellPool> {
        self.0.pool(id)
    }
}

#[test]
fn release_without_raw_id_keeps_the_cast() {
    let host = Host::new();
    let (mut session, caster, mut transport) = begin(&host, &["bolt"], 0);
    let stack = caster.stack().clone();
    let unnumbered = UnnumberedSpells(common::catalog());
    let env = CastEnv::new(
        &unnumbered,
        &host.world,
        &host.cooldowns,
        &host.ammo,
        &host.timer,
    );

    let outcome = session.cast_release(&caster, &stack, MAX_USE - 25, &env, &mut transport);

    assert_eq!(outcome, CastOutcome::Skipped);
    assert!(!outcome.should_stop_using());
    assert_eq!(session.current_spell(), Some(&id("bolt")));
    assert_eq!(requests(&transport).len(), 1);
}
