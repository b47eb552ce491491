//! The attack resolution pipeline.

use rg_actor::{ActorArena, ItemArena};
use rg_core::{ActorRng, ItemId};

use crate::{AttackIntent, AttackOutcome, AttackReport, CombatError, CombatResult};

// ── CombatEngine ──────────────────────────────────────────────────────────────

/// Resolves attack intents against the actor arena.
///
/// Owns the session-scoped combat policy and counters: the protective
/// ("safety") clamp for the player, the player's kill tally, and the
/// game-over flag raised when the player dies.
pub struct CombatEngine {
    /// When set, lethal damage against the player is clamped to leave 1
    /// health instead of killing.
    pub protect_player: bool,
    /// Kills where the instigator was the player.
    pub kill_count: u64,
    /// Raised when an attack kills the player.  Never lowered by the engine.
    pub game_over: bool,
}

impl CombatEngine {
    pub fn new(protect_player: bool) -> Self {
        Self {
            protect_player,
            kill_count: 0,
            game_over: false,
        }
    }

    /// Resolve one intent: roll to hit, sample damage or healing, apply
    /// modifiers and lethal clamping, mutate the target's health, and build
    /// the narration.
    ///
    /// Errors when an intent ID no longer resolves in the arena.
    pub fn perform_attack(
        &mut self,
        actors: &mut ActorArena,
        items: &ItemArena,
        intent: &AttackIntent,
        rng: &mut ActorRng,
    ) -> CombatResult<AttackReport> {
        let attacker = actors
            .get(intent.attacker)
            .ok_or(CombatError::UnknownActor(intent.attacker))?;
        let attacker_name = attacker.name.clone();
        let attacker_is_player = attacker.is_player;
        let weapon_bonus = item_power(items, attacker.equipped_weapon);

        let target = actors
            .get(intent.target)
            .ok_or(CombatError::UnknownActor(intent.target))?;
        let target_name = target.name.clone();
        let target_is_player = target.is_player;
        let target_health = target.health;
        let target_max_health = target.max_health;
        let armor_bonus = item_power(items, target.equipped_armor);

        let voice = Voice {
            attacker: Subject { name: attacker_name, is_player: attacker_is_player },
            target: Subject { name: target_name, is_player: target_is_player },
        };

        // ── Hit roll: uniform [0, 1) vs. the configured chance ────────────
        if rng.roll() >= intent.hit_chance {
            let outcome = if intent.is_healing() {
                AttackOutcome::HealMiss
            } else {
                AttackOutcome::Miss
            };
            return Ok(AttackReport {
                outcome,
                damage: 0,
                hit: false,
                message: voice.render(outcome, 0),
            });
        }

        // ── Healing: inverted sample range, no modifiers ──────────────────
        if intent.is_healing() {
            let lo = intent.min_damage.min(intent.max_damage);
            let hi = intent.min_damage.max(intent.max_damage);
            let rolled = rng.gen_range(lo..=hi);
            // Never overheal past max health.
            let restored = (-rolled).min(target_max_health - target_health).max(0);
            let damage = -restored;

            let target = actors
                .get_mut(intent.target)
                .ok_or(CombatError::UnknownActor(intent.target))?;
            target.health -= damage;

            return Ok(AttackReport {
                outcome: AttackOutcome::Heal,
                damage,
                hit: true,
                message: voice.render(AttackOutcome::Heal, restored),
            });
        }

        // ── Damage: sample, add weapon, subtract half armor, clamp ────────
        let lo = intent.min_damage.min(intent.max_damage);
        let hi = intent.min_damage.max(intent.max_damage);
        let base = rng.gen_range(lo..=hi);
        let mut damage = (base + weapon_bonus - armor_bonus / 2).max(0);

        let outcome = if target_health - damage <= 0 {
            if self.protect_player && target_is_player {
                // Safety policy: leave the protected actor at exactly 1.
                damage = target_health - 1;
                AttackOutcome::Hit
            } else {
                if attacker_is_player {
                    self.kill_count += 1;
                }
                if target_is_player {
                    self.game_over = true;
                }
                AttackOutcome::Kill
            }
        } else {
            AttackOutcome::Hit
        };

        let target = actors
            .get_mut(intent.target)
            .ok_or(CombatError::UnknownActor(intent.target))?;
        target.health -= damage;

        Ok(AttackReport {
            outcome,
            damage,
            hit: true,
            message: voice.render(outcome, damage),
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn item_power(items: &ItemArena, equipped: Option<ItemId>) -> i32 {
    equipped
        .and_then(|id| items.get(id))
        .map(|item| item.power)
        .unwrap_or(0)
}

/// Perspective-aware naming for narration.
struct Subject {
    name: String,
    is_player: bool,
}

impl Subject {
    fn subject(&self) -> String {
        if self.is_player { "You".to_owned() } else { format!("The {}", self.name) }
    }

    fn object(&self) -> String {
        if self.is_player { "you".to_owned() } else { format!("the {}", self.name) }
    }

    /// "hit" when the player acts, "hits" otherwise.
    fn verb(&self, stem: &str) -> String {
        if self.is_player { stem.to_owned() } else { format!("{stem}s") }
    }
}

struct Voice {
    attacker: Subject,
    target: Subject,
}

impl Voice {
    fn render(&self, outcome: AttackOutcome, amount: i32) -> String {
        let a = &self.attacker;
        let t = &self.target;
        match outcome {
            AttackOutcome::Miss => {
                format!("{} {} {}.", a.subject(), a.verb("miss"), t.object())
            }
            AttackOutcome::HealMiss => format!(
                "{} {} to heal {}.",
                a.subject(),
                a.verb("fail"),
                t.object()
            ),
            AttackOutcome::Hit => format!(
                "{} {} {} for {} damage.",
                a.subject(),
                a.verb("hit"),
                t.object(),
                amount
            ),
            AttackOutcome::Kill => {
                format!("{} {} {}!", a.subject(), a.verb("kill"), t.object())
            }
            AttackOutcome::Heal => format!(
                "{} {} {} for {}.",
                a.subject(),
                a.verb("heal"),
                t.object(),
                amount
            ),
        }
    }
}
