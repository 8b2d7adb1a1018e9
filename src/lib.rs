//! Reorganize a photo tree into `year/month/day` folders using each photo's
//! EXIF capture date.

pub mod photodate_core;
