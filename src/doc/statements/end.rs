/*!
# `END`

## Purpose
Finish the program.

## Remarks
Control goes back to the terminal and variables keep their values.
A program also ends when it runs past its last line, so a final
`END` is not required. `END` is handy to keep execution from
falling into subroutines placed after the main program.

## Example
```text
10 GOSUB 100
20 END
100 PRINT "SUBROUTINE"
110 RETURN
RUN
SUBROUTINE
```

*/
