//! Fake host collaborators shared by the integration tests.
#![allow(dead_code)]

use client_core::{Outbound, RecordingTransport, SpellRequest};
use game_core::{
    AmmoCheck, AmmoOracle, AreaShape, CastEnv, CastTimer, Caster, CooldownOracle, CursorTarget,
    EntityId, ItemHandle, ItemStack, LinearCastTimer, Pose, ReleaseTarget, Spell, SpellCatalog,
    SpellContainer, SpellId, StackHandle, WorldQuery,
};

pub const MAX_USE: i32 = LinearCastTimer::DEFAULT_MAX_USE_TICKS;

pub fn id(path: &str) -> SpellId {
    SpellId::new("wizards", path).unwrap()
}

/// bolt=0, heal=1, mark=2, nova=3, breath=4.
pub fn catalog() -> SpellCatalog {
    SpellCatalog::from_parts(
        [
            Spell::new(id("bolt"), 32.0, ReleaseTarget::Projectile).with_cast_duration(20),
            Spell::new(
                id("heal"),
                16.0,
                ReleaseTarget::Cursor(CursorTarget {
                    use_caster_as_fallback: true,
                }),
            )
            .with_cast_duration(10),
            Spell::new(id("mark"), 16.0, ReleaseTarget::Cursor(CursorTarget::default())),
            Spell::new(id("nova"), 8.0, ReleaseTarget::Area(AreaShape::default()))
                .with_cast_duration(10),
            Spell::new(id("breath"), 12.0, ReleaseTarget::Beam)
                .with_cast_duration(60)
                .with_channel(5),
        ],
        [],
    )
    .unwrap()
}

pub fn staff(spells: &[&str]) -> ItemStack {
    ItemStack::new(StackHandle(1), ItemHandle(100)).with_container(
        SpellContainer::new(spells.len().max(1)).with_spells(spells.iter().map(|path| id(path))),
    )
}

pub struct FakeCaster {
    pub id: EntityId,
    pub main_hand: Option<ItemStack>,
    pub inventory: Vec<StackHandle>,
    pub using: bool,
    pub pose: Pose,
}

impl FakeCaster {
    pub fn holding(stack: ItemStack) -> Self {
        Self {
            id: EntityId(1),
            inventory: vec![StackHandle(50), stack.handle],
            main_hand: Some(stack),
            using: false,
            pose: Pose::new(4.0, 65.0, -2.5, 45.0, -10.0, true),
        }
    }

    pub fn stack(&self) -> &ItemStack {
        self.main_hand.as_ref().unwrap()
    }
}

impl Caster for FakeCaster {
    fn entity_id(&self) -> EntityId {
        self.id
    }

    fn main_hand(&self) -> Option<&ItemStack> {
        self.main_hand.as_ref()
    }

    fn inventory_slot_of(&self, stack: StackHandle) -> Option<usize> {
        self.inventory.iter().position(|handle| *handle == stack)
    }

    fn is_using_item(&self) -> bool {
        self.using
    }

    fn pose(&self) -> Pose {
        self.pose
    }
}

#[derive(Default)]
pub struct FakeWorld {
    pub raycast: Option<EntityId>,
    pub ray: Vec<EntityId>,
    pub area: Vec<EntityId>,
}

impl WorldQuery for FakeWorld {
    fn target_from_raycast(&self, _caster: &dyn Caster, _range: f32) -> Option<EntityId> {
        self.raycast
    }

    fn targets_from_raycast(&self, _caster: &dyn Caster, _range: f32) -> Vec<EntityId> {
        self.ray.clone()
    }

    fn targets_from_area(
        &self,
        _caster: &dyn Caster,
        _range: f32,
        _area: &AreaShape,
    ) -> Vec<EntityId> {
        self.area.clone()
    }
}

#[derive(Default)]
pub struct FakeCooldowns(pub Vec<SpellId>);

impl CooldownOracle for FakeCooldowns {
    fn is_cooling_down(&self, spell: &SpellId) -> bool {
        self.0.contains(spell)
    }
}

#[derive(Default)]
pub struct FakeAmmo {
    pub required: Option<(ItemHandle, bool)>,
}

impl AmmoOracle for FakeAmmo {
    fn ammo_for(&self, _caster: &dyn Caster, _spell: &Spell, _stack: &ItemStack) -> AmmoCheck {
        match self.required {
            Some((item, available)) => AmmoCheck::required(item, available),
            None => AmmoCheck::not_required(),
        }
    }
}

/// Timer reporting a fixed progress, for exercising exact thresholds.
pub struct FixedTimer {
    pub progress: f32,
    pub channel_due: bool,
}

impl CastTimer for FixedTimer {
    fn progress(&self, _caster: &dyn Caster, _remaining: i32, _spell: &Spell) -> f32 {
        self.progress
    }

    fn is_channel_tick_due(&self, _spell: &Spell, _remaining: i32) -> bool {
        self.channel_due
    }
}

/// Every collaborator a session reads, owned in one place.
pub struct Host<T: CastTimer = LinearCastTimer> {
    pub spells: SpellCatalog,
    pub world: FakeWorld,
    pub cooldowns: FakeCooldowns,
    pub ammo: FakeAmmo,
    pub timer: T,
}

impl Host {
    pub fn new() -> Self {
        Self::with_timer(LinearCastTimer::default())
    }
}

impl<T: CastTimer> Host<T> {
    pub fn with_timer(timer: T) -> Self {
        Self {
            spells: catalog(),
            world: FakeWorld::default(),
            cooldowns: FakeCooldowns::default(),
            ammo: FakeAmmo::default(),
            timer,
        }
    }

    pub fn env(&self) -> CastEnv<'_> {
        CastEnv::new(
            &self.spells,
            &self.world,
            &self.cooldowns,
            &self.ammo,
            &self.timer,
        )
    }
}

pub fn requests(transport: &RecordingTransport) -> Vec<SpellRequest> {
    transport
        .sent()
        .iter()
        .filter_map(Outbound::as_spell_request)
        .cloned()
        .collect()
}

pub fn pose_syncs(transport: &RecordingTransport) -> usize {
    transport
        .sent()
        .iter()
        .filter(|packet| matches!(packet, Outbound::PoseSync(_)))
        .count()
}
