mod convert;
mod download;
mod flow;
mod helpers;
mod upload;
