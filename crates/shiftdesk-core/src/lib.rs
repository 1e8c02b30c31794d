//! Shiftdesk Core - image transform and scheduling library
//!
//! This crate provides the computational core of the Shiftdesk employee app:
//! rotate-and-crop export for profile and document photos, shift-hour and
//! day-count arithmetic, a deterministic demo schedule, time-off requests and
//! notification settings.

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod logging;
pub mod schedule;
pub mod settings;
pub mod transform;

pub use config::{SurfaceLimits, TransformConfig};
pub use decode::{DecodeError, DecodedImage, ImageSource};
pub use encode::{EncodeError, EncodedImage, OutputFormat};
pub use error::TransformError;
pub use schedule::{days_between, generate_shifts_for_days, shift_hours, ScheduleError, TimeOfDay};
pub use transform::{transform, transform_with_config, CropRegion, RenderContextError};
