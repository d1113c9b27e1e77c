// Request handlers, one module per route area.
//
// Gated handlers (cycles, schedule, flags) expect the session middleware to
// have injected a Session extension; the rest are public.
pub mod cycles;
pub mod flags;
pub mod health;
pub mod provider;
pub mod schedule;
