/// Maps a pointer position to a grid cell.
///
/// Works in the viewport's local space: `viewport_size` is the size the
/// viewport is displayed at, so a scaled-down or scaled-up viewport maps the
/// same way as an unscaled one. Results are not clamped.
pub fn screen_to_cell(pointer: (f32, f32), viewport_origin: (f32, f32), viewport_size: f32, grid_size: u32) -> (i32, i32) {
    if viewport_size <= 0.0 || grid_size == 0 {
        return (-1, -1);
    }
    let cell = viewport_size / grid_size as f32;
    let local_x = pointer.0 - viewport_origin.0;
    let local_y = pointer.1 - viewport_origin.1;
    ((local_x / cell).floor() as i32, (local_y / cell).floor() as i32)
}

/// Where the viewport currently sits in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub origin_x: f32,
    pub origin_y: f32,
    pub display_size: f32,
}

impl ViewState {
    pub fn new(display_size: f32) -> Self {
        Self { origin_x: 0.0, origin_y: 0.0, display_size }
    }

    pub fn update_viewport(&mut self, origin_x: f32, origin_y: f32, display_size: f32) {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self.display_size = display_size;
    }

    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, grid_size: u32) -> (i32, i32) {
        screen_to_cell((screen_x, screen_y), (self.origin_x, self.origin_y), self.display_size, grid_size)
    }
}
