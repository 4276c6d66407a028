// Adapters layer: collaborators that consume a balanced roster (console menu,
// request handler, file export). None of them balances players itself.

pub mod console;
pub mod export;
pub mod request;
