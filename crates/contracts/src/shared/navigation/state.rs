/// Позиция в книге каталога.
///
/// `cursor` is the index of the left (or only) visible page. The fields are
/// only written by [`super::SpreadEngine`], which keeps
/// `0 <= cursor <= max_index` after every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub(super) cursor: usize,
    pub(super) spread: bool,
}

impl NavigationState {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Two pages side by side (wide viewport).
    pub fn spread(&self) -> bool {
        self.spread
    }

    pub fn step(&self) -> usize {
        if self.spread {
            2
        } else {
            1
        }
    }

    pub fn max_index(&self, page_count: usize) -> usize {
        if self.spread {
            page_count.saturating_sub(2)
        } else {
            page_count.saturating_sub(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_max_index() {
        let single = NavigationState::default();
        assert_eq!(single.step(), 1);
        assert_eq!(single.max_index(5), 4);
        assert_eq!(single.max_index(1), 0);

        let spread = NavigationState {
            cursor: 0,
            spread: true,
        };
        assert_eq!(spread.step(), 2);
        assert_eq!(spread.max_index(5), 3);
        assert_eq!(spread.max_index(1), 0);
    }
}
