lib::entry!(y2023::schematic::solve, input = "d03.txt", expect = (4361, 467835));
