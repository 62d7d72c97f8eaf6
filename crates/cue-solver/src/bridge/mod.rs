pub mod shot_buffer;
