pub mod flow_arrow;
