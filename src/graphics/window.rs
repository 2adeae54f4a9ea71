//! Picking the monitor a window is mostly on, and centring the window on it.

use glutin::dpi::PhysicalPosition;
use glutin::monitor::MonitorHandle;
use glutin::window::Window;
use tracing::debug;

/// A rectangle in desktop pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Area shared with `other`; zero if they don't touch.
    pub fn overlap_area(&self, other: &ScreenRect) -> i64 {
        let min_x = self.x.max(other.x);
        let min_y = self.y.max(other.y);
        let max_x = (self.x + self.width).min(other.x + other.width);
        let max_y = (self.y + self.height).min(other.y + other.height);

        let w = (max_x - min_x).max(0) as i64;
        let h = (max_y - min_y).max(0) as i64;
        w * h
    }
}

/// Index of the monitor the window overlaps the most. `None` when the window is on no monitor at
/// all. Ties go to the monitor listed first.
pub fn best_monitor_index(window: &ScreenRect, monitors: &[ScreenRect]) -> Option<usize> {
    let mut best = None;
    let mut best_area = 0;

    for (i, monitor) in monitors.iter().enumerate() {
        let area = window.overlap_area(monitor);
        if area > best_area {
            best_area = area;
            best = Some(i);
        }
    }

    best
}

/// Top-left corner that puts a window of the given size in the middle of the monitor.
pub fn centered_position(monitor: &ScreenRect, width: i32, height: i32) -> (i32, i32) {
    (
        monitor.x + (monitor.width - width) / 2,
        monitor.y + (monitor.height - height) / 2,
    )
}

fn monitor_rect(monitor: &MonitorHandle) -> ScreenRect {
    let pos = monitor.position();
    let size = monitor.size();
    ScreenRect::new(pos.x, pos.y, size.width as i32, size.height as i32)
}

fn window_rect(window: &Window) -> ScreenRect {
    // Some platforms (Wayland) don't tell windows where they are
    let pos = window.outer_position().unwrap_or(PhysicalPosition::new(0, 0));
    let size = window.outer_size();
    ScreenRect::new(pos.x, pos.y, size.width as i32, size.height as i32)
}

/// The monitor the window overlaps the most.
pub fn best_monitor(window: &Window) -> Option<MonitorHandle> {
    let monitors: Vec<MonitorHandle> = window.available_monitors().into_iter().collect();
    let rects: Vec<ScreenRect> = monitors.iter().map(monitor_rect).collect();

    let index = best_monitor_index(&window_rect(window), &rects)?;
    monitors.into_iter().nth(index)
}

/// Moves the window to the middle of `monitor`. Does nothing without a monitor.
pub fn center_window(window: &Window, monitor: Option<MonitorHandle>) {
    let monitor = match monitor {
        Some(m) => m,
        None => return,
    };

    let size = window.outer_size();
    let (x, y) = centered_position(&monitor_rect(&monitor), size.width as i32, size.height as i32);

    debug!(x, y, monitor = ?monitor.name(), "centring window");
    window.set_outer_position(PhysicalPosition::new(x, y));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn picks_the_monitor_holding_most_of_the_window() {
        let monitors = [
            ScreenRect::new(0, 0, 1920, 1080),
            ScreenRect::new(1920, 0, 1920, 1080),
        ];

        // 100px on the left monitor, 540px on the right
        let window = ScreenRect::new(1820, 100, 640, 480);
        assert_eq!(best_monitor_index(&window, &monitors), Some(1));

        let window = ScreenRect::new(100, 100, 640, 480);
        assert_eq!(best_monitor_index(&window, &monitors), Some(0));
    }

    #[test]
    fn window_off_every_monitor_has_no_best() {
        let monitors = [ScreenRect::new(0, 0, 1920, 1080)];

        // Entirely up and to the left: both overlaps are negative, which mustn't count as area
        let window = ScreenRect::new(-1000, -1000, 640, 480);
        assert_eq!(best_monitor_index(&window, &monitors), None);

        assert_eq!(best_monitor_index(&window, &[]), None);
    }

    #[test]
    fn ties_go_to_the_first_monitor() {
        let monitors = [
            ScreenRect::new(0, 0, 1000, 1000),
            ScreenRect::new(1000, 0, 1000, 1000),
        ];
        let window = ScreenRect::new(900, 0, 200, 200);
        assert_eq!(best_monitor_index(&window, &monitors), Some(0));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = ScreenRect::new(0, 0, 100, 50);
        let b = ScreenRect::new(50, 25, 100, 100);
        assert_eq!(a.overlap_area(&b), 50 * 25);
        assert_eq!(b.overlap_area(&a), 50 * 25);
    }

    #[test]
    fn centres_on_the_monitor() {
        let monitor = ScreenRect::new(1920, 0, 1920, 1080);
        assert_eq!(centered_position(&monitor, 640, 480), (1920 + 640, 300));
    }
}
