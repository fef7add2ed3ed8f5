pub mod city_name;
pub mod graph_series;
pub mod timestamp;
