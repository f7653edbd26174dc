//! Level progression.

/// Ordered list of levels with a cursor on the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelProgression {
    levels: Vec<String>,
    current: usize,
}

impl LevelProgression {
    pub fn new(levels: Vec<String>) -> Self {
        Self { levels, current: 0 }
    }

    /// Identifier of the active level, if there are any levels.
    pub fn current(&self) -> Option<&str> {
        self.levels.get(self.current).map(String::as_str)
    }

    /// 1-based number of the active level.
    pub fn level_number(&self) -> u32 {
        u32::try_from(self.current + 1).unwrap_or(u32::MAX)
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Move to the next level. Returns `false` on the last one.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.levels.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Back to the first level.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Jump to a 1-based level number, clamped to the available levels.
    pub fn jump_to(&mut self, level_number: u32) {
        let index = usize::try_from(level_number.saturating_sub(1)).unwrap_or(usize::MAX);
        self.current = index.min(self.levels.len().saturating_sub(1));
    }
}

impl Default for LevelProgression {
    fn default() -> Self {
        Self::new((1..=5).map(|n| format!("level_{n}")).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_stops_at_last_level() {
        let mut levels = LevelProgression::new(vec!["a".into(), "b".into()]);
        assert_eq!(levels.current(), Some("a"));
        assert!(levels.advance());
        assert_eq!(levels.current(), Some("b"));
        assert!(!levels.advance());
        assert_eq!(levels.level_number(), 2);
    }

    #[test]
    fn test_reset_and_jump() {
        let mut levels = LevelProgression::default();
        assert_eq!(levels.len(), 5);

        levels.jump_to(3);
        assert_eq!(levels.current(), Some("level_3"));

        levels.jump_to(99);
        assert_eq!(levels.current(), Some("level_5"));

        levels.jump_to(0);
        assert_eq!(levels.current(), Some("level_1"));

        levels.advance();
        levels.reset();
        assert_eq!(levels.level_number(), 1);
    }

    #[test]
    fn test_empty_progression() {
        let mut levels = LevelProgression::new(Vec::new());
        assert!(levels.is_empty());
        assert_eq!(levels.current(), None);
        assert!(!levels.advance());
        levels.jump_to(2);
        assert_eq!(levels.current(), None);
    }
}
