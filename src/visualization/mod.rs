pub mod gmsim_vis2d;
