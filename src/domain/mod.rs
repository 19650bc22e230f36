//! Domain models and types for Khione.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **User input** ([`FormInput`], [`CompressorModel`], [`Refrigerant`])
//! - **Service output** ([`ResultSet`])
//! - **Reconciled view values** ([`DisplayField`], [`FieldValue`])
//! - **Error types** ([`KhioneError`], [`CalculationError`], [`AssetError`])
//! - **Result type alias** ([`Result`])
//!
//! # Editing input
//!
//! ```rust
//! use khione::domain::{FormInput, Refrigerant};
//!
//! # fn example() -> khione::domain::Result<()> {
//! let mut input = FormInput::default();
//! input.apply_edit("refrigerant", "R134a")?;
//! input.apply_edit("evap_temp", "-5")?;
//! assert_eq!(input.refrigerant, Refrigerant::R134a);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod field;
pub mod input;
pub mod result;
pub mod results;

// Re-export commonly used types for convenience
pub use errors::{AssetError, CalculationError, KhioneError};
pub use field::{DisplayField, FieldValue, NO_VALUE};
pub use input::{CompressorModel, FormInput, InputKey, Refrigerant};
pub use result::Result;
pub use results::{ResultSet, MODEL_KEY};
