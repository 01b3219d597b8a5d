//! Pac-Man game rules.

pub fn eat_ghost(power_pellet_active: bool, touching_ghost: bool) -> bool {
    power_pellet_active && touching_ghost
}

pub fn score(touching_power_pellet: bool, touching_dot: bool) -> bool {
    touching_power_pellet || touching_dot
}

pub fn lose(power_pellet_active: bool, touching_ghost: bool) -> bool {
    !power_pellet_active && touching_ghost
}

pub fn win(has_eaten_all_dots: bool, power_pellet_active: bool, touching_ghost: bool) -> bool {
    has_eaten_all_dots && !lose(power_pellet_active, touching_ghost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_rules() {
        assert!(eat_ghost(true, true));
        assert!(!eat_ghost(false, true));
        assert!(lose(false, true));
        assert!(!lose(true, true));
    }

    #[test]
    fn scoring() {
        assert!(score(true, false));
        assert!(score(false, true));
        assert!(!score(false, false));
    }

    #[test]
    fn winning() {
        assert!(win(true, false, false));
        assert!(win(true, true, true));
        assert!(!win(true, false, true));
        assert!(!win(false, true, false));
    }
}
