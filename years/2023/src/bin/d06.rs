lib::entry!(y2023::races::solve, input = "d06.txt", expect = (288, 71503));
