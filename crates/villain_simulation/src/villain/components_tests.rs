//! Tests for villain components.

#[cfg(test)]
mod tests {
    use super::super::components::*;
    use std::time::Duration;

    #[test]
    fn test_villain_config_default() {
        let config = VillainConfig::default();
        assert_eq!(config.attack_range, 2.0);
        assert_eq!(config.move_speed, 5.0);
        assert_eq!(config.max_health, 5);
        assert_eq!(config.attack_cooldown, 1.0);
        assert_eq!(config.attack_cooldown_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_negative_cooldown_clamped() {
        let config = VillainConfig {
            attack_cooldown: -3.0,
            ..Default::default()
        };
        assert_eq!(config.attack_cooldown_duration(), Duration::ZERO);

        let config = VillainConfig {
            attack_cooldown: f32::NAN,
            ..Default::default()
        };
        assert_eq!(config.attack_cooldown_duration(), Duration::ZERO);
    }

    #[test]
    fn test_oversized_cooldown_saturates() {
        for attack_cooldown in [f32::INFINITY, f32::MAX, 1.0e20] {
            let config = VillainConfig {
                attack_cooldown,
                ..Default::default()
            };
            assert_eq!(config.attack_cooldown_duration(), Duration::MAX, "cooldown = {}", attack_cooldown);
        }
    }

    #[test]
    fn test_target_acquire_resets_health_only_when_found() {
        let mut target = VillainTarget::default();
        target.resource_health = 4;

        target.acquire(None);
        assert_eq!(target.resource, None);
        assert_eq!(target.resource_health, 4);

        let tree = bevy::prelude::Entity::from_raw(7);
        target.acquire(Some(tree));
        assert_eq!(target.resource, Some(tree));
        assert_eq!(target.resource_health, RESOURCE_HIT_POINTS);
    }

    #[test]
    fn test_target_depleted_on_tenth_strike() {
        let mut target = VillainTarget::default();

        for hit in 1..RESOURCE_HIT_POINTS {
            assert!(!target.strike(), "depleted early on hit {}", hit);
        }
        assert!(target.strike());
        assert_eq!(target.resource_health, 0);
    }

    #[test]
    fn test_attack_state_guards_reentry() {
        let mut attack = AttackState::default();
        assert!(attack.begin());
        assert_eq!(attack, AttackState::Swinging);

        // Уже атакуем
        assert!(!attack.begin());

        attack.start_cooldown(Duration::from_millis(100));
        assert!(!attack.begin());
    }

    #[test]
    fn test_attack_cooldown_ticks_to_idle() {
        let mut attack = AttackState::default();
        attack.start_cooldown(Duration::from_millis(100));

        assert!(!attack.tick(Duration::from_millis(60)));
        assert!(!attack.is_idle());

        assert!(attack.tick(Duration::from_millis(40)));
        assert!(attack.is_idle());

        // Idle не тикает
        assert!(!attack.tick(Duration::from_millis(40)));
    }

    #[test]
    fn test_swinging_not_advanced_by_tick() {
        let mut attack = AttackState::Swinging;
        assert!(!attack.tick(Duration::from_secs(5)));
        assert_eq!(attack, AttackState::Swinging);
    }

    #[test]
    fn test_life_state_activate_once() {
        let mut life = LifeState::default();
        assert!(!life.is_alive());
        assert!(life.is_living());

        assert!(life.activate());
        assert!(life.is_alive());
        assert!(!life.activate());
    }

    #[test]
    fn test_life_state_dies_once() {
        let mut life = LifeState::Alive;
        assert!(life.begin_dying());
        assert!(life.is_dying());
        assert!(!life.begin_dying());
        assert!(!life.activate());
    }

    #[test]
    fn test_dormant_can_die() {
        let mut life = LifeState::Dormant;
        assert!(life.begin_dying());
        assert_eq!(life, LifeState::Dying { remaining: DEATH_DELAY });
    }

    #[test]
    fn test_dying_timer_expires_after_delay() {
        let mut life = LifeState::Alive;
        life.begin_dying();

        let step = Duration::from_millis(20);
        for _ in 0..49 {
            assert!(!life.tick_dying(step));
        }
        assert!(life.tick_dying(step));
    }
}
