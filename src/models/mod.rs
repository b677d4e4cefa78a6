pub mod matrix;
pub mod qr_code;

pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, Mode, Module, QrMatrix, Version};
