lib::entry!(y2023::network::solve, input = "d08.txt", expect = (2, 2));
