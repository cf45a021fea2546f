// cvmatch: resume vs. job description analysis
//
// This is the library root. `analysis` is the text comparison engine; the
// other modules are the collaborators around it (document extraction,
// result interpretation, the request pipeline, and output).

pub mod analysis;
pub mod config;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod scoring;
