pub mod u101_generate_packet;
