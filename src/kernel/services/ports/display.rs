use crate::kernel::display::Display;

/// Output side of the calculator: receives the rendered lines after each change.
pub trait DisplayPort {
    fn present(&mut self, display: &Display) -> std::io::Result<()>;
}
