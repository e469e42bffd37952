//! Sidebar viewport state: selection, scrolling and the deferred
//! center-on-active-topic scroll.
//!
//! Row indices here address the *filtered* row list the app renders, not
//! the full catalog. The centering scroll is scheduled by path and resolved
//! only after the next draw pass, once the viewport height reflects the
//! current layout; scheduling a new target replaces an unfired one, so a
//! stale scroll can never land after a newer navigation.

/// Sidebar display state
pub struct SidebarState {
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub visible_rows: usize,
    pending_center: Option<String>,
    anim_target: Option<usize>,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            visible_rows: 20,
            pending_center: None,
            anim_target: None,
        }
    }
}

impl SidebarState {
    /// Schedule a centering scroll to the row holding `path`. Replaces any
    /// unfired request.
    pub fn request_center(&mut self, path: &str) {
        self.pending_center = Some(path.to_string());
    }

    /// Take the pending scroll target, leaving none behind.
    pub fn take_pending(&mut self) -> Option<String> {
        self.pending_center.take()
    }

    #[cfg(test)]
    pub fn pending_path(&self) -> Option<&str> {
        self.pending_center.as_deref()
    }

    /// Scroll so `row` sits in the middle of the viewport, animated when
    /// `smooth` is set, an immediate jump otherwise.
    pub fn center_on(&mut self, row: usize, total: usize, smooth: bool) {
        let half = self.visible_rows / 2;
        let target = row.saturating_sub(half).min(self.max_scroll(total));
        if smooth {
            self.anim_target = Some(target);
        } else {
            self.anim_target = None;
            self.scroll_offset = target;
        }
    }

    /// Advance an in-flight animated scroll by one tick.
    pub fn step_animation(&mut self) {
        let Some(target) = self.anim_target else {
            return;
        };
        let distance = target.abs_diff(self.scroll_offset);
        let step = (distance / 3).max(1);
        if target > self.scroll_offset {
            self.scroll_offset += step;
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(step);
        }
        if self.scroll_offset == target {
            self.anim_target = None;
        }
    }

    /// Keep `row` inside the viewport after a manual selection move.
    /// Manual movement preempts any animated scroll.
    pub fn ensure_visible(&mut self, row: usize) {
        self.anim_target = None;
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if self.visible_rows > 0 && row >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = row - self.visible_rows + 1;
        }
    }

    /// Re-clamp the offset after the row list shrank.
    pub fn clamp_scroll(&mut self, total: usize) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll(total));
    }

    fn max_scroll(&self, total: usize) -> usize {
        total.saturating_sub(self.visible_rows)
    }
}
