//! Newsroom domain model shared by the `client` UI and the `server` host.
//!
//! This crate owns the press-release records, the listing operations run over
//! them (category filter, text search, newest-first ordering, featured
//! partitioning), the SEO metadata derived from an article and the outbound
//! share/contact links. Everything here is pure and synchronous: the catalog is
//! a literal compiled into the binary and no operation mutates it.

pub mod article;
pub mod catalog;
pub mod query;
pub mod seo;
pub mod share;
pub mod site;

pub use article::{Article, Category, NewsError, validate_slug};
pub use catalog::{ARTICLES, all, find_by_slug};
pub use query::{CategoryFilter, ListingQuery, Partition};
