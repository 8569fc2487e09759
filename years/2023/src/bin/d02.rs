lib::entry!(y2023::cubes::solve, input = "d02.txt", expect = (8, 2286));
