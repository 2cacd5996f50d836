/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Request dispatcher with single re-login retry
pub mod http;
/// Endpoint templates and the login form
pub mod requests;
/// Response documents with a known shape
pub mod responses;
