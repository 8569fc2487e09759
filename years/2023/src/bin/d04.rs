lib::entry!(y2023::scratchcards::solve, input = "d04.txt", expect = (13, 30));
