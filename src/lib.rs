//! Client-side behavior layer for a single-page portfolio site.
//!
//! The crate is compiled to WebAssembly and attaches behavior to markup that
//! is rendered elsewhere: theme switching, the mobile nav panel, scroll
//! reveals, the testimonial carousel, the contact form, notifications, and
//! scroll-driven header/nav styling.
//!
//! Every controller is a plain state machine that answers events with a list
//! of [`effect::Effect`]s. The [`browser`] module (feature `hydrate`) applies
//! those effects to the real DOM; [`headless`] (tests and feature `headless`) applies them to an in-memory
//! page model so the whole site can be driven from native tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Owns every controller and routes events and timer tasks |
//! | [`effect`] | Effect, target, and task types shared by all controllers |
//! | [`theme`] | Light/dark theme with persisted preference |
//! | [`nav`] | Mobile navigation panel |
//! | [`reveal`] | One-shot scroll reveals, skill bars, and lazy images |
//! | [`carousel`] | Testimonial carousel |
//! | [`contact`] | Contact form validation and simulated submission |
//! | [`notify`] | Transient notifications |
//! | [`scroll`] | Header styling, anchor scrolling, active nav highlighting |
//! | [`resume`] | Resume download |
//! | [`storage`] | Preference store trait and in-memory store |
//! | [`config`] | Site configuration with defaults |
//! | [`timeline`] | Virtual clock for scheduled tasks |
//! | [`headless`] | In-memory page model |
//! | [`consts`] | Default timings and thresholds |

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod carousel;
pub mod config;
pub mod consts;
pub mod contact;
pub mod effect;
#[cfg(any(test, feature = "headless"))]
pub mod headless;
pub mod nav;
pub mod notify;
pub mod resume;
pub mod reveal;
pub mod scroll;
pub mod site;
pub mod storage;
pub mod theme;
#[cfg(any(test, feature = "headless"))]
pub mod timeline;
