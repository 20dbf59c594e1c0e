/*
 * Responsibility
 * - Public entry points of the middleware layer
 */
pub mod basic_auth;
pub mod http;
