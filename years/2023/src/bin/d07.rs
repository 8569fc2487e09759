lib::entry!(y2023::camel::solve, input = "d07.txt", expect = (6440, 5905));
