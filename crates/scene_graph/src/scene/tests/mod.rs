//! Integration tests exercising the scene graph across node, graph and
//! propagation code

mod frame_cycle;
