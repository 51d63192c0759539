mod kittens;
mod logging;
