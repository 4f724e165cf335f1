//! Discrete camera paging
//!
//! The camera never scrolls. It shows exactly one segment and jumps to the
//! next page the instant the player's x crosses a segment boundary. The
//! viewport offset is therefore always an exact multiple of the segment
//! width.

use serde::{Deserialize, Serialize};

use super::state::SessionState;
use super::world::WorldModel;
use crate::consts::SEGMENT_WIDTH;

/// Segment index for a world-space x, clamped into the known range
pub fn segment_index_for(x: f32, world: &WorldModel) -> usize {
    let count = world.segment_count().max(1);
    // Out-of-world positions page to the nearest edge segment
    let x = x.max(0.0);
    ((x / SEGMENT_WIDTH) as usize).min(count - 1)
}

/// Maps player position to a discrete viewport offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraPager {
    /// Current viewport offset in world-space px
    offset: f32,
}

impl CameraPager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Recompute the page for the player's x. Updates the cross-scene segment
    /// index and returns the new index when the page changed.
    pub fn update(
        &mut self,
        player_x: f32,
        world: &WorldModel,
        state: &mut SessionState,
    ) -> Option<usize> {
        let index = segment_index_for(player_x, world);
        let target = index as f32 * SEGMENT_WIDTH;
        if target != self.offset || index != state.current_segment {
            self.offset = target;
            state.current_segment = index;
            log::debug!("camera page -> {} ({})", index, world.segment_name(index));
            Some(index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_index_boundaries() {
        let world = WorldModel::the_hive();
        assert_eq!(segment_index_for(0.0, &world), 0);
        assert_eq!(segment_index_for(799.9, &world), 0);
        assert_eq!(segment_index_for(800.0, &world), 1);
        assert_eq!(segment_index_for(850.0, &world), 1);
        assert_eq!(segment_index_for(3199.0, &world), 3);
    }

    #[test]
    fn test_segment_index_clamps_out_of_world() {
        let world = WorldModel::the_hive();
        assert_eq!(segment_index_for(-50.0, &world), 0);
        assert_eq!(segment_index_for(3200.0, &world), 3);
        assert_eq!(segment_index_for(99999.0, &world), 3);
    }

    #[test]
    fn test_pager_jumps_once_per_crossing() {
        let world = WorldModel::the_hive();
        let mut state = SessionState::new(4);
        let mut pager = CameraPager::new();

        assert_eq!(pager.update(100.0, &world, &mut state), None);
        assert_eq!(pager.offset(), 0.0);

        assert_eq!(pager.update(850.0, &world, &mut state), Some(1));
        assert_eq!(pager.offset(), 800.0);
        assert_eq!(state.current_segment, 1);

        // Same page, no event
        assert_eq!(pager.update(900.0, &world, &mut state), None);

        assert_eq!(pager.update(3199.0, &world, &mut state), Some(3));
        assert_eq!(pager.offset(), 2400.0);
    }

    #[test]
    fn test_offset_is_page_aligned() {
        let world = WorldModel::the_hive();
        let mut state = SessionState::new(4);
        let mut pager = CameraPager::new();
        for x in [0.0_f32, 123.0, 799.0, 801.0, 1600.0, 2450.0, 3199.0, 5000.0] {
            pager.update(x, &world, &mut state);
            assert_eq!(pager.offset() % SEGMENT_WIDTH, 0.0);
        }
    }
}
