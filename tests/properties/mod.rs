mod logging;
mod validation;
