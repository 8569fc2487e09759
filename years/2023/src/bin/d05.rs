lib::entry!(y2023::almanac::solve, input = "d05.txt", expect = (35, 46));
