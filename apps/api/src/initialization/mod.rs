// Document initialization: template + targeting → pre-populated document.
// Resolution reads templates and sample content; only `initializer` writes.

pub mod content_type;
pub mod handlers;
pub mod initializer;
pub mod materializer;
pub mod preview;
pub mod resolver;

#[cfg(test)]
pub mod test_support;
