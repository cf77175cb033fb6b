//! DTO conversion between the domain model and the shared wire types.

mod conversion;
