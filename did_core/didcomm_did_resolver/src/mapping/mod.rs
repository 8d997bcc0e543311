mod did_doc;
mod service;
mod verification_method;
