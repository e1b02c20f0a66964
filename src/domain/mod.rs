// Domain layer: plain data shared by the calculators, the job runner and the report output.

pub mod model;
